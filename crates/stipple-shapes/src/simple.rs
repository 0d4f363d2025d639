//! Single-primitive shapes
//!
//! Plain geometric records with closed-form scalar attributes. The
//! collection engine only ever sees these through the `Particle` trait;
//! everything here is ordinary owned data, so the shapes also serialize.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use stipple_core::attr::AttrValue;
use stipple_core::particle::{center_attribute, Particle};

/// Disc described by center and radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            center: [0.0, 0.0],
            radius,
        }
    }

    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.center = center;
        self
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Particle for Circle {
    fn kind(&self) -> &str {
        "circle"
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "radius" => Some(AttrValue::Number(self.radius)),
            "area" => Some(AttrValue::Number(self.area())),
            "perimeter" => Some(AttrValue::Number(self.perimeter())),
            other => center_attribute(self.center, other),
        }
    }

    fn default_color(&self) -> [u8; 3] {
        [0x40, 0xC0, 0x80] // Green
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}

/// Axis-aligned ellipse described by center and semi-axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: [f64; 2],
    /// Semi-axis along x
    pub rx: f64,
    /// Semi-axis along y
    pub ry: f64,
}

impl Ellipse {
    pub fn new(rx: f64, ry: f64) -> Self {
        Self {
            center: [0.0, 0.0],
            rx,
            ry,
        }
    }

    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.center = center;
        self
    }

    pub fn area(&self) -> f64 {
        PI * self.rx * self.ry
    }

    /// Ramanujan's approximation
    pub fn perimeter(&self) -> f64 {
        let (a, b) = (self.rx, self.ry);
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }
}

impl Particle for Ellipse {
    fn kind(&self) -> &str {
        "ellipse"
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "rx" => Some(AttrValue::Number(self.rx)),
            "ry" => Some(AttrValue::Number(self.ry)),
            "area" => Some(AttrValue::Number(self.area())),
            "perimeter" => Some(AttrValue::Number(self.perimeter())),
            other => center_attribute(self.center, other),
        }
    }

    fn default_color(&self) -> [u8; 3] {
        [0x40, 0x80, 0xC0] // Blue
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}

/// Axis-aligned rectangle described by center and full side lengths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub center: [f64; 2],
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            center: [0.0, 0.0],
            width,
            height,
        }
    }

    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.center = center;
        self
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Particle for Rectangle {
    fn kind(&self) -> &str {
        "rectangle"
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "width" => Some(AttrValue::Number(self.width)),
            "height" => Some(AttrValue::Number(self.height)),
            "area" => Some(AttrValue::Number(self.area())),
            "perimeter" => Some(AttrValue::Number(self.perimeter())),
            other => center_attribute(self.center, other),
        }
    }

    fn default_color(&self) -> [u8; 3] {
        [0xC0, 0x80, 0x40] // Orange
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_attributes() {
        let circle = Circle::new(2.0).with_center([3.0, 4.0]);
        assert_eq!(circle.attribute("radius"), Some(AttrValue::Number(2.0)));
        assert_eq!(circle.attribute("cx"), Some(AttrValue::Number(3.0)));
        assert_eq!(circle.attribute("cy"), Some(AttrValue::Number(4.0)));
        assert_eq!(
            circle.attribute("area"),
            Some(AttrValue::Number(PI * 4.0))
        );
        assert_eq!(circle.attribute("nope"), None);
    }

    #[test]
    fn test_ellipse_area_and_perimeter() {
        let ellipse = Ellipse::new(3.0, 3.0);
        assert!((ellipse.area() - PI * 9.0).abs() < 1e-9);
        // circular case reduces to the exact circumference
        assert!((ellipse.perimeter() - 2.0 * PI * 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rectangle_attributes() {
        let rectangle = Rectangle::new(4.0, 2.0);
        assert_eq!(rectangle.attribute("area"), Some(AttrValue::Number(8.0)));
        assert_eq!(
            rectangle.attribute("perimeter"),
            Some(AttrValue::Number(12.0))
        );
        assert_eq!(rectangle.kind(), "rectangle");
    }

    #[test]
    fn test_circle_serde_round_trip() {
        let circle = Circle::new(5.0).with_center([1.0, 2.0]);
        let json = serde_json::to_string(&circle).unwrap();
        let back: Circle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circle);
    }
}
