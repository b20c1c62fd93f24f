//! Pattern 2: Factory
//! Example: Shape Lookup by Name
//!
//! Run with: cargo run --example p2_shape_factory

use creational_patterns::ShapeFactory;

fn main() -> std::io::Result<()> {
    println!("=== Known Shapes ===");
    for label in ["CIRCLE", "RECTANGLE", "SQUARE"] {
        if let Some(shape) = ShapeFactory::get_shape(Some(label)) {
            shape.draw()?;
        }
    }

    println!("\n=== Case Does Not Matter ===");
    for label in ["circle", "Circle", "cIrClE"] {
        println!("{:>8} -> {:?}", label, ShapeFactory::get_shape(Some(label)));
    }

    println!("\n=== Unknown or Missing Labels ===");
    println!("triangle -> {:?}", ShapeFactory::get_shape(Some("triangle")));
    println!("    None -> {:?}", ShapeFactory::get_shape(None));

    Ok(())
}
