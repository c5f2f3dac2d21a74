//! Geometric shapes stored in a [`ShapeBox`](crate::ShapeBox).
//!
//! Every concrete shape is its own struct implementing [`Geometry`]. The
//! closed [`Shape`] enum wraps them and forwards `perimeter`/`area` to the
//! active variant, so "is this a circle" is a plain match.

use std::f64::consts::PI;
use std::fmt;

use enum_dispatch::enum_dispatch;

/// Perimeter and area of a shape.
#[enum_dispatch]
pub trait Geometry {
    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;
}

// =============================================================================
// Concrete shapes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Geometry for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Geometry for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Geometry for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Equilateral triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub side: f64,
}

impl Triangle {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Geometry for Triangle {
    fn perimeter(&self) -> f64 {
        3.0 * self.side
    }

    fn area(&self) -> f64 {
        3.0_f64.sqrt() / 4.0 * self.side * self.side
    }
}

// =============================================================================
// Shape: the closed variant set
// =============================================================================

/// Any shape a box can hold. `From` conversions for each variant are
/// generated by `enum_dispatch`.
#[enum_dispatch(Geometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
        };
        f.write_str(name)
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "Circle(r={})", c.radius),
            Shape::Square(s) => write!(f, "Square(side={})", s.side),
            Shape::Rectangle(r) => write!(f, "Rectangle({}x{})", r.width, r.height),
            Shape::Triangle(t) => write!(f, "Triangle(side={})", t.side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_circle_formulas() {
        let c = Circle::new(2.0);
        assert!(approx(c.perimeter(), 4.0 * PI));
        assert!(approx(c.area(), 4.0 * PI));
    }

    #[test]
    fn test_square_and_rectangle_formulas() {
        let s = Square::new(4.0);
        assert_eq!(s.perimeter(), 16.0);
        assert_eq!(s.area(), 16.0);

        let r = Rectangle::new(2.0, 5.0);
        assert_eq!(r.perimeter(), 14.0);
        assert_eq!(r.area(), 10.0);
    }

    #[test]
    fn test_triangle_formulas() {
        let t = Triangle::new(2.0);
        assert_eq!(t.perimeter(), 6.0);
        assert!(approx(t.area(), 3.0_f64.sqrt()));
    }

    #[test]
    fn test_enum_dispatches_to_variant() {
        let shapes: Vec<Shape> = vec![
            Circle::new(1.0).into(),
            Square::new(3.0).into(),
            Rectangle::new(1.0, 2.0).into(),
        ];
        let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
        assert!(approx(areas[0], PI));
        assert_eq!(areas[1], 9.0);
        assert_eq!(areas[2], 2.0);
    }

    #[test]
    fn test_kind_and_circle_check() {
        let circle: Shape = Circle::new(1.0).into();
        let triangle: Shape = Triangle::new(1.0).into();

        assert!(circle.is_circle());
        assert!(!triangle.is_circle());
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert_eq!(triangle.kind().to_string(), "Triangle");
    }

    #[test]
    fn test_display() {
        let shape: Shape = Rectangle::new(3.0, 4.5).into();
        assert_eq!(shape.to_string(), "Rectangle(3x4.5)");
        let shape: Shape = Circle::new(2.0).into();
        assert_eq!(shape.to_string(), "Circle(r=2)");
    }
}
