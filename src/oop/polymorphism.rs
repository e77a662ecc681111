//! Polymorphism: one `area()` call, a different computation per shape.

use crate::Result;
use std::f64::consts::PI;
use std::io::Write;

pub trait Shape {
    fn area(&self) -> f64 {
        0.0
    }
}

/// A shape with no geometry of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlainShape;

impl Shape for PlainShape {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(5.0)),
        Box::new(Rectangle::new(4.0, 6.0)),
    ];
    for shape in &shapes {
        writeln!(out, "{}", shape.area())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;

    #[test]
    fn test_areas() {
        assert!((Circle::new(1.0).area() - PI).abs() < 1e-12);
        assert_eq!(Rectangle::new(3.0, 2.5).area(), 7.5);
    }

    #[test]
    fn test_plain_shape_uses_default() {
        let shape: &dyn Shape = &PlainShape;
        assert_eq!(shape.area(), 0.0);
    }

    #[test]
    fn test_total_area_over_mixed_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(2.0, 3.0)),
            Box::new(PlainShape),
            Box::new(Rectangle::new(1.0, 4.0)),
        ];
        assert_eq!(total_area(&shapes), 10.0);
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn test_run_output() {
        assert_eq!(capture(run), vec!["78.53981633974483", "24"]);
    }
}
