//! # Creational Patterns
//!
//! Two object-creation patterns.
//!
//! ## Patterns Covered
//!
//! 1. **Builder** ([`house`])
//!    - Required parts supplied up front and validated
//!    - Optional parts with defaults, set through chained `&mut self` setters
//!    - Non-consuming `build()` that snapshots into an immutable value
//!    - Plans loaded from TOML/JSON ([`plan`])
//!
//! 2. **Factory** ([`shape`])
//!    - Closed set of variants as an enum
//!    - Case-insensitive lookup through a single registry table
//!    - Unknown labels yield `None` rather than an error
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_house_builder
//! cargo run --example p2_shape_factory
//! cargo run --bin creational -- demo
//! ```
//!
//! ```
//! use creational_patterns::{HouseBuilder, ShapeFactory, Shape};
//!
//! let house = HouseBuilder::new("Brick", "Gable")?
//!     .doors(3)
//!     .windows(10)
//!     .floor_type("Wooden")
//!     .garden(true)
//!     .build();
//! assert_eq!(house.doors(), 3);
//!
//! assert_eq!(ShapeFactory::get_shape(Some("CIRCLE")), Some(Shape::Circle));
//! # Ok::<(), creational_patterns::PatternError>(())
//! ```

pub mod error;
pub mod house;
pub mod plan;
pub mod shape;

pub use error::{PatternError, Result};
pub use house::{House, HouseBuilder};
pub use plan::HousePlan;
pub use shape::{Shape, ShapeFactory};
