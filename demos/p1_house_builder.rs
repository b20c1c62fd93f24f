//! Pattern 1: Builder
//! Example: Staged House Construction
//!
//! Run with: cargo run --example p1_house_builder

use creational_patterns::{HouseBuilder, PatternError};

fn main() -> Result<(), PatternError> {
    println!("=== Fully Configured House ===");
    // Usage: required parts go to new(), optional parts are chained, build() snapshots.
    let house1 = HouseBuilder::new("Brick", "Gable")?
        .doors(3)
        .windows(10)
        .floor_type("Wooden")
        .garden(true)
        .build();
    println!("{}", house1);

    println!("\n=== Partially Configured House ===");
    let house2 = HouseBuilder::new("Wood", "Flat")?.doors(2).windows(6).build();
    println!("{}", house2);

    println!("\n=== Defaults Only ===");
    let house3 = HouseBuilder::new("Concrete", "Slanted")?.build();
    println!("{}", house3);

    println!("\n=== Reusing the Builder ===");
    // build() borrows, so the same builder can keep producing houses.
    let mut builder = HouseBuilder::new("Stone", "Hip")?;
    let plain = builder.build();
    let with_garden = builder.garden(true).build();
    println!("Before: {}", plain);
    println!("After:  {}", with_garden);

    println!("\n=== Blank Required Part ===");
    match HouseBuilder::new("", "Gable") {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Expected error: {}", e),
    }

    Ok(())
}
