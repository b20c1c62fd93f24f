//! Pattern 2: Factory
//!
//! Label-to-variant lookup over a closed set of shapes.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use lazy_static::lazy_static;
use tracing::debug;

use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Rectangle,
    Square,
}

lazy_static! {
    // Keys are lowercase; lookups lowercase the label first.
    static ref SHAPE_REGISTRY: HashMap<&'static str, Shape> = Shape::ALL
        .iter()
        .map(|shape| (shape.key(), *shape))
        .collect();
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Rectangle, Shape::Square];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Rectangle => "Rectangle",
            Shape::Square => "Square",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Rectangle => "rectangle",
            Shape::Square => "square",
        }
    }

    /// Writes the shape's descriptive line to `out`.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Drawing a {}", self.name())
    }

    pub fn draw(&self) -> io::Result<()> {
        self.render(&mut io::stdout().lock())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeFactory::get_shape(Some(s)).ok_or_else(|| PatternError::UnknownShape(s.to_string()))
    }
}

/// Stateless creator for `Shape` values.
pub struct ShapeFactory;

impl ShapeFactory {
    /// Case-insensitive lookup. `None` for a missing label or an unknown
    /// name; that is a normal outcome, not an error.
    pub fn get_shape(label: Option<&str>) -> Option<Shape> {
        let label = label?;
        let shape = SHAPE_REGISTRY.get(label.to_ascii_lowercase().as_str()).copied();
        debug!(label, shape = ?shape, "shape lookup");
        shape
    }
}
