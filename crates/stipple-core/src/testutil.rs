//! Shared test doubles for the engine's unit tests.
//!
//! Keeps the core tests independent of any real shape crate: a stub
//! particle with a configurable kind tag and a two-kind stub factory.

use std::sync::Arc;

use crate::attr::{AttrValue, Params};
use crate::factory::{Catalog, FactoryError, ParticleFactory, ShapeGroup};
use crate::particle::{center_attribute, Particle};

/// Minimal particle: a kind tag, a center, and one numeric attribute.
#[derive(Debug, Clone)]
pub struct StubParticle {
    kind: &'static str,
    center: [f64; 2],
    radius: f64,
}

impl StubParticle {
    pub fn circle(radius: f64) -> Self {
        Self {
            kind: "circle",
            center: [0.0, 0.0],
            radius,
        }
    }

    pub fn dimer() -> Self {
        Self {
            kind: "dimer",
            center: [0.0, 0.0],
            radius: 4.0,
        }
    }

    pub fn at(mut self, center: [f64; 2]) -> Self {
        self.center = center;
        self
    }
}

impl Particle for StubParticle {
    fn kind(&self) -> &str {
        self.kind
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "radius" => Some(AttrValue::Number(self.radius)),
            other => center_attribute(self.center, other),
        }
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}

pub fn circle(radius: f64) -> Box<dyn Particle> {
    Box::new(StubParticle::circle(radius))
}

pub fn dimer() -> Box<dyn Particle> {
    Box::new(StubParticle::dimer())
}

/// Factory over the two stub kinds. `circle` honors a `radius` param.
#[derive(Debug)]
pub struct StubFactory;

impl ParticleFactory for StubFactory {
    fn create(&self, kind: &str, params: &Params) -> Result<Box<dyn Particle>, FactoryError> {
        match kind {
            "circle" => {
                let radius = match params.get("radius") {
                    Some(value) => {
                        value
                            .as_number()
                            .ok_or_else(|| FactoryError::InvalidParam {
                                kind: "circle".into(),
                                param: "radius".into(),
                                expected: "number",
                            })?
                    }
                    None => 10.0,
                };
                Ok(Box::new(StubParticle::circle(radius)))
            }
            "dimer" => Ok(Box::new(StubParticle::dimer())),
            other => Err(FactoryError::unknown_kind(other, &self.catalog())),
        }
    }

    fn catalog(&self) -> Catalog {
        vec![
            (ShapeGroup::Simple, vec!["circle".into()]),
            (ShapeGroup::Composite, vec!["dimer".into()]),
        ]
    }
}

pub fn factory() -> Arc<dyn ParticleFactory> {
    Arc::new(StubFactory)
}
