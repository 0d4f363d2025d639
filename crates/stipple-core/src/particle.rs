//! The particle capability contract
//!
//! A particle is whatever a shape family wants it to be. The collection
//! engine only sees this trait: a kind tag, a center coordinate, and named
//! attributes. Geometry, rasterization, and rendering belong to the crates
//! that implement and consume particles, never to the engine.
//!
//! Entries own their particle exclusively, so deriving a new set from an
//! existing one (select, merge, subtract, sort) duplicates particles via
//! [`Particle::clone_box`].

use crate::attr::AttrValue;
use crate::config::DEFAULT_COLOR;
use std::fmt;

/// Capability surface the collection engine depends on
pub trait Particle: fmt::Debug {
    /// Kind tag identifying the shape family (`"circle"`, `"dimer"`, ...)
    fn kind(&self) -> &str;

    /// Center coordinate, `[x, y]`
    fn center(&self) -> [f64; 2];

    /// Read a named attribute, if this particle has it
    ///
    /// Every particle answers `"cx"` and `"cy"` through its center; shape
    /// families add their own scalars (`"radius"`, `"area"`, `"label"`, ...).
    fn attribute(&self, name: &str) -> Option<AttrValue>;

    /// Display color used when an entry does not set one explicitly
    fn default_color(&self) -> [u8; 3] {
        DEFAULT_COLOR
    }

    /// Duplicate this particle behind a fresh box
    fn clone_box(&self) -> Box<dyn Particle>;
}

impl Clone for Box<dyn Particle> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Center-derived attributes shared by every shape family
///
/// Implementations call this from their `attribute` before matching their
/// own names, so `"center"`, `"cx"` and `"cy"` behave uniformly.
pub fn center_attribute(center: [f64; 2], name: &str) -> Option<AttrValue> {
    match name {
        "center" => Some(AttrValue::Point(center)),
        "cx" => Some(AttrValue::Number(center[0])),
        "cy" => Some(AttrValue::Number(center[1])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Dot {
        center: [f64; 2],
    }

    impl Particle for Dot {
        fn kind(&self) -> &str {
            "dot"
        }

        fn center(&self) -> [f64; 2] {
            self.center
        }

        fn attribute(&self, name: &str) -> Option<AttrValue> {
            center_attribute(self.center, name)
        }

        fn clone_box(&self) -> Box<dyn Particle> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_center_attributes() {
        let dot = Dot { center: [3.0, 4.0] };
        assert_eq!(dot.attribute("cx"), Some(AttrValue::Number(3.0)));
        assert_eq!(dot.attribute("cy"), Some(AttrValue::Number(4.0)));
        assert_eq!(dot.attribute("center"), Some(AttrValue::Point([3.0, 4.0])));
        assert_eq!(dot.attribute("radius"), None);
    }

    #[test]
    fn test_boxed_clone() {
        let dot: Box<dyn Particle> = Box::new(Dot { center: [1.0, 2.0] });
        let copy = dot.clone();
        assert_eq!(copy.center(), [1.0, 2.0]);
        assert_eq!(copy.kind(), "dot");
    }

    #[test]
    fn test_default_color() {
        let dot = Dot { center: [0.0, 0.0] };
        assert_eq!(dot.default_color(), DEFAULT_COLOR);
    }
}
