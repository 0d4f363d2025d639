//! Multi-lobed aggregate shapes
//!
//! Clusters of equal circular lobes around a shared center. `overlap`
//! controls how far neighboring lobes sink into each other: 0 leaves them
//! tangent, 1 collapses them onto the center.

use serde::{Deserialize, Serialize};

use stipple_core::attr::AttrValue;
use stipple_core::particle::{center_attribute, Particle};

/// Two equal lobes on a horizontal axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimer {
    pub center: [f64; 2],
    /// Radius of each lobe
    pub radius: f64,
    /// Fractional lobe overlap in `[0, 1]`
    pub overlap: f64,
}

impl Dimer {
    pub fn new(radius: f64, overlap: f64) -> Self {
        Self {
            center: [0.0, 0.0],
            radius,
            overlap,
        }
    }

    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.center = center;
        self
    }

    /// Centers of the two lobes, left then right
    pub fn lobe_centers(&self) -> Vec<[f64; 2]> {
        let offset = self.radius * (1.0 - self.overlap);
        vec![
            [self.center[0] - offset, self.center[1]],
            [self.center[0] + offset, self.center[1]],
        ]
    }
}

impl Particle for Dimer {
    fn kind(&self) -> &str {
        "dimer"
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "lobes" => Some(AttrValue::Int(2)),
            "radius" => Some(AttrValue::Number(self.radius)),
            "overlap" => Some(AttrValue::Number(self.overlap)),
            other => center_attribute(self.center, other),
        }
    }

    fn default_color(&self) -> [u8; 3] {
        [0x80, 0x40, 0xC0] // Purple
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}

/// Three equal lobes on the vertices of an equilateral triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trimer {
    pub center: [f64; 2],
    /// Radius of each lobe
    pub radius: f64,
    /// Fractional lobe overlap in `[0, 1]`
    pub overlap: f64,
}

impl Trimer {
    pub fn new(radius: f64, overlap: f64) -> Self {
        Self {
            center: [0.0, 0.0],
            radius,
            overlap,
        }
    }

    pub fn with_center(mut self, center: [f64; 2]) -> Self {
        self.center = center;
        self
    }

    /// Centers of the three lobes, starting at the top and going
    /// counterclockwise
    pub fn lobe_centers(&self) -> Vec<[f64; 2]> {
        let spread = self.radius * (1.0 - self.overlap) * 2.0 / 3.0_f64.sqrt();
        [90.0_f64, 210.0, 330.0]
            .iter()
            .map(|degrees| {
                let radians = degrees.to_radians();
                [
                    self.center[0] + spread * radians.cos(),
                    self.center[1] + spread * radians.sin(),
                ]
            })
            .collect()
    }
}

impl Particle for Trimer {
    fn kind(&self) -> &str {
        "trimer"
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "lobes" => Some(AttrValue::Int(3)),
            "radius" => Some(AttrValue::Number(self.radius)),
            "overlap" => Some(AttrValue::Number(self.overlap)),
            other => center_attribute(self.center, other),
        }
    }

    fn default_color(&self) -> [u8; 3] {
        [0xC0, 0xC0, 0x40] // Yellow
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}
