//! Pattern 1: Builder
//!
//! A `House` has two required parts (walls and roof) and four optional ones.
//! `HouseBuilder` stages those parts and snapshots them into an immutable
//! `House` on every `build()` call.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::plan::HousePlan;

pub const DEFAULT_DOORS: i32 = 1;
pub const DEFAULT_WINDOWS: i32 = 1;
pub const DEFAULT_FLOOR_TYPE: &str = "Tiled";
pub const DEFAULT_GARDEN: bool = false;

/// The finished product. Holds its own copy of every part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    walls: String,
    roof: String,
    doors: i32,
    windows: i32,
    floor_type: String,
    garden: bool,
}

impl House {
    // Convenient entry point to the builder.
    pub fn builder(walls: impl Into<String>, roof: impl Into<String>) -> Result<HouseBuilder> {
        HouseBuilder::new(walls, roof)
    }

    pub fn walls(&self) -> &str {
        &self.walls
    }

    pub fn roof(&self) -> &str {
        &self.roof
    }

    pub fn doors(&self) -> i32 {
        self.doors
    }

    pub fn windows(&self) -> i32 {
        self.windows
    }

    pub fn floor_type(&self) -> &str {
        &self.floor_type
    }

    pub fn has_garden(&self) -> bool {
        self.garden
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House [walls={}, roof={}, doors={}, windows={}, floorType={}, garden={}]",
            self.walls, self.roof, self.doors, self.windows, self.floor_type, self.garden
        )
    }
}

/// Staging area for a `House`.
///
/// Setters take `&mut self` and return `&mut Self`, and `build()` only
/// borrows, so one builder can produce any number of houses. Not meant to be
/// shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseBuilder {
    walls: String,
    roof: String,
    doors: i32,
    windows: i32,
    floor_type: String,
    garden: bool,
}

impl HouseBuilder {
    /// Creates a builder with the required parts and default optional parts.
    ///
    /// Fails with `InvalidArgument` when either label is empty or whitespace.
    pub fn new(walls: impl Into<String>, roof: impl Into<String>) -> Result<Self> {
        let walls = required("walls", walls.into())?;
        let roof = required("roof", roof.into())?;
        debug!(%walls, %roof, "house builder created");

        Ok(HouseBuilder {
            walls,
            roof,
            doors: DEFAULT_DOORS,
            windows: DEFAULT_WINDOWS,
            floor_type: DEFAULT_FLOOR_TYPE.to_string(),
            garden: DEFAULT_GARDEN,
        })
    }

    /// Seeds a builder from a plan; only the optional parts the plan names
    /// override the defaults.
    pub fn from_plan(plan: &HousePlan) -> Result<Self> {
        let mut builder = HouseBuilder::new(plan.walls.as_str(), plan.roof.as_str())?;
        if let Some(doors) = plan.doors {
            builder.doors(doors);
        }
        if let Some(windows) = plan.windows {
            builder.windows(windows);
        }
        if let Some(floor_type) = &plan.floor_type {
            builder.floor_type(floor_type.as_str());
        }
        if let Some(garden) = plan.garden {
            builder.garden(garden);
        }
        Ok(builder)
    }

    pub fn doors(&mut self, doors: i32) -> &mut Self {
        self.doors = doors;
        self
    }

    pub fn windows(&mut self, windows: i32) -> &mut Self {
        self.windows = windows;
        self
    }

    pub fn floor_type(&mut self, floor_type: impl Into<String>) -> &mut Self {
        self.floor_type = floor_type.into();
        self
    }

    pub fn garden(&mut self, garden: bool) -> &mut Self {
        self.garden = garden;
        self
    }

    // Borrows the builder; every call allocates a fresh House.
    pub fn build(&self) -> House {
        let house = House {
            walls: self.walls.clone(),
            roof: self.roof.clone(),
            doors: self.doors,
            windows: self.windows,
            floor_type: self.floor_type.clone(),
            garden: self.garden,
        };
        debug!(house = %house, "house built");
        house
    }
}

fn required(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(PatternError::invalid_argument(field, "must not be blank"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fully_configured_house() {
        let house = HouseBuilder::new("Brick", "Gable")
            .unwrap()
            .doors(3)
            .windows(10)
            .floor_type("Wooden")
            .garden(true)
            .build();

        assert_eq!(house.walls(), "Brick");
        assert_eq!(house.roof(), "Gable");
        assert_eq!(house.doors(), 3);
        assert_eq!(house.windows(), 10);
        assert_eq!(house.floor_type(), "Wooden");
        assert!(house.has_garden());
    }

    #[test]
    fn test_defaults_applied() {
        let house = HouseBuilder::new("Concrete", "Slanted").unwrap().build();
        assert_eq!(house.walls(), "Concrete");
        assert_eq!(house.roof(), "Slanted");
        assert_eq!(house.doors(), 1);
        assert_eq!(house.windows(), 1);
        assert_eq!(house.floor_type(), "Tiled");
        assert!(!house.has_garden());
    }

    #[test]
    fn test_partial_configuration_keeps_other_defaults() {
        let house = House::builder("Wood", "Flat")
            .unwrap()
            .doors(2)
            .windows(6)
            .build();
        assert_eq!(house.doors(), 2);
        assert_eq!(house.windows(), 6);
        assert_eq!(house.floor_type(), DEFAULT_FLOOR_TYPE);
        assert_eq!(house.has_garden(), DEFAULT_GARDEN);
    }

    #[test]
    fn test_blank_required_fields_rejected() {
        assert!(matches!(
            HouseBuilder::new("", "Gable"),
            Err(PatternError::InvalidArgument { ref field, .. }) if field == "walls"
        ));
        assert!(matches!(
            HouseBuilder::new("Brick", "   "),
            Err(PatternError::InvalidArgument { ref field, .. }) if field == "roof"
        ));
    }

    #[test]
    fn test_negative_counts_accepted() {
        let house = HouseBuilder::new("Brick", "Gable")
            .unwrap()
            .doors(-4)
            .windows(-1)
            .build();
        assert_eq!(house.doors(), -4);
        assert_eq!(house.windows(), -1);
    }

    #[test]
    fn test_build_twice_yields_equal_distinct_houses() {
        let mut builder = HouseBuilder::new("Brick", "Gable").unwrap();
        builder.doors(3);
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
        assert_ne!(first.walls().as_ptr(), second.walls().as_ptr());
    }

    #[test]
    fn test_house_is_a_snapshot() {
        let mut builder = HouseBuilder::new("Brick", "Gable").unwrap();
        let before = builder.build();
        builder.doors(7).floor_type("Marble");
        let after = builder.build();

        assert_eq!(before.doors(), 1);
        assert_eq!(before.floor_type(), "Tiled");
        assert_eq!(after.doors(), 7);
        assert_eq!(after.floor_type(), "Marble");
    }

    #[test]
    fn test_display_field_order() {
        let house = HouseBuilder::new("Brick", "Gable")
            .unwrap()
            .doors(3)
            .windows(10)
            .floor_type("Wooden")
            .garden(true)
            .build();
        assert_eq!(
            house.to_string(),
            "House [walls=Brick, roof=Gable, doors=3, windows=10, floorType=Wooden, garden=true]"
        );
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let house = HouseBuilder::new("Concrete", "Slanted").unwrap().build();
        let value = serde_json::to_value(&house).unwrap();
        assert_eq!(value["floorType"], "Tiled");
        assert_eq!(value["garden"], false);
    }

    #[test]
    fn test_from_plan_overrides_only_present_fields() {
        let plan = HousePlan {
            walls: "Stone".to_string(),
            roof: "Hip".to_string(),
            doors: None,
            windows: Some(4),
            floor_type: None,
            garden: Some(true),
        };
        let house = HouseBuilder::from_plan(&plan).unwrap().build();
        assert_eq!(house.doors(), DEFAULT_DOORS);
        assert_eq!(house.windows(), 4);
        assert_eq!(house.floor_type(), DEFAULT_FLOOR_TYPE);
        assert!(house.has_garden());
    }

    #[derive(Debug, Clone)]
    enum Setter {
        Doors(i32),
        Windows(i32),
        FloorType(String),
        Garden(bool),
    }

    fn setter() -> impl Strategy<Value = Setter> {
        prop_oneof![
            any::<i32>().prop_map(Setter::Doors),
            any::<i32>().prop_map(Setter::Windows),
            "[A-Za-z]{1,12}".prop_map(Setter::FloorType),
            any::<bool>().prop_map(Setter::Garden),
        ]
    }

    proptest! {
        #[test]
        fn prop_required_fields_preserved(walls in "[A-Za-z]{1,16}", roof in "[A-Za-z]{1,16}") {
            let house = HouseBuilder::new(walls.clone(), roof.clone()).unwrap().build();
            prop_assert_eq!(house.walls(), walls.as_str());
            prop_assert_eq!(house.roof(), roof.as_str());
            prop_assert_eq!(house.doors(), DEFAULT_DOORS);
            prop_assert_eq!(house.windows(), DEFAULT_WINDOWS);
            prop_assert_eq!(house.floor_type(), DEFAULT_FLOOR_TYPE);
            prop_assert_eq!(house.has_garden(), DEFAULT_GARDEN);
        }

        #[test]
        fn prop_last_write_wins(setters in proptest::collection::vec(setter(), 0..24)) {
            let mut builder = HouseBuilder::new("Brick", "Gable").unwrap();
            let mut doors = DEFAULT_DOORS;
            let mut windows = DEFAULT_WINDOWS;
            let mut floor_type = DEFAULT_FLOOR_TYPE.to_string();
            let mut garden = DEFAULT_GARDEN;

            for setter in &setters {
                match setter {
                    Setter::Doors(v) => { builder.doors(*v); doors = *v; }
                    Setter::Windows(v) => { builder.windows(*v); windows = *v; }
                    Setter::FloorType(v) => { builder.floor_type(v.as_str()); floor_type = v.clone(); }
                    Setter::Garden(v) => { builder.garden(*v); garden = *v; }
                }
            }

            let house = builder.build();
            prop_assert_eq!(house.doors(), doors);
            prop_assert_eq!(house.windows(), windows);
            prop_assert_eq!(house.floor_type(), floor_type.as_str());
            prop_assert_eq!(house.has_garden(), garden);
        }
    }
}
