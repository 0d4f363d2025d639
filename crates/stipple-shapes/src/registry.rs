//! Shape registry
//!
//! Maps kind tags to shape constructors and implements the engine's
//! [`ParticleFactory`] contract. [`ShapeRegistry::builtin`] registers
//! everything this crate ships; applications extend or replace entries
//! through [`ShapeRegistry::register`].
//!
//! Constructors read named parameters leniently: unknown names are
//! ignored, but a parameter that is present with an unusable value fails
//! the construction.

use std::collections::HashMap;

use tracing::debug;

use stipple_core::attr::Params;
use stipple_core::factory::{Catalog, FactoryError, ParticleFactory, ShapeGroup};
use stipple_core::particle::Particle;

use crate::composite::{Dimer, Trimer};
use crate::simple::{Circle, Ellipse, Rectangle};

/// Kind-tag constructor: named params in, boxed particle out
pub type Constructor = Box<dyn Fn(&Params) -> Result<Box<dyn Particle>, FactoryError>>;

struct Registration {
    group: ShapeGroup,
    build: Constructor,
}

/// Registry of shape constructors keyed by kind tag
pub struct ShapeRegistry {
    registrations: HashMap<String, Registration>,
}

impl ShapeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// Registry holding every shape this crate ships
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "circle",
            ShapeGroup::Simple,
            Box::new(|params| {
                let center = point_param(params, "circle", "center")?;
                let radius = positive_param(params, "circle", "radius", 10.0)?;
                Ok(Box::new(Circle::new(radius).with_center(center)))
            }),
        );
        registry.register(
            "ellipse",
            ShapeGroup::Simple,
            Box::new(|params| {
                let center = point_param(params, "ellipse", "center")?;
                let rx = positive_param(params, "ellipse", "rx", 12.0)?;
                let ry = positive_param(params, "ellipse", "ry", 8.0)?;
                Ok(Box::new(Ellipse::new(rx, ry).with_center(center)))
            }),
        );
        registry.register(
            "rectangle",
            ShapeGroup::Simple,
            Box::new(|params| {
                let center = point_param(params, "rectangle", "center")?;
                let width = positive_param(params, "rectangle", "width", 20.0)?;
                let height = positive_param(params, "rectangle", "height", 10.0)?;
                Ok(Box::new(Rectangle::new(width, height).with_center(center)))
            }),
        );
        registry.register(
            "dimer",
            ShapeGroup::Composite,
            Box::new(|params| {
                let center = point_param(params, "dimer", "center")?;
                let radius = positive_param(params, "dimer", "radius", 8.0)?;
                let overlap = fraction_param(params, "dimer", "overlap", 0.2)?;
                Ok(Box::new(Dimer::new(radius, overlap).with_center(center)))
            }),
        );
        registry.register(
            "trimer",
            ShapeGroup::Composite,
            Box::new(|params| {
                let center = point_param(params, "trimer", "center")?;
                let radius = positive_param(params, "trimer", "radius", 8.0)?;
                let overlap = fraction_param(params, "trimer", "overlap", 0.2)?;
                Ok(Box::new(Trimer::new(radius, overlap).with_center(center)))
            }),
        );
        registry
    }

    /// Register (or replace) a constructor under a kind tag
    pub fn register(&mut self, kind: impl Into<String>, group: ShapeGroup, build: Constructor) {
        let kind = kind.into();
        debug!(kind = %kind, group = %group, "registered shape constructor");
        self.registrations.insert(kind, Registration { group, build });
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.registrations.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleFactory for ShapeRegistry {
    fn create(&self, kind: &str, params: &Params) -> Result<Box<dyn Particle>, FactoryError> {
        match self.registrations.get(kind) {
            Some(registration) => (registration.build)(params),
            None => Err(FactoryError::unknown_kind(kind, &self.catalog())),
        }
    }

    /// Grouped listing, simple before composite, sorted within each
    /// group. Empty groups are omitted.
    fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for group in [ShapeGroup::Simple, ShapeGroup::Composite] {
            let mut kinds: Vec<String> = self
                .registrations
                .iter()
                .filter(|(_, registration)| registration.group == group)
                .map(|(kind, _)| kind.clone())
                .collect();
            if !kinds.is_empty() {
                kinds.sort();
                catalog.push((group, kinds));
            }
        }
        catalog
    }
}

fn invalid(kind: &str, param: &str, expected: &'static str) -> FactoryError {
    FactoryError::InvalidParam {
        kind: kind.to_string(),
        param: param.to_string(),
        expected,
    }
}

fn point_param(params: &Params, kind: &str, name: &str) -> Result<[f64; 2], FactoryError> {
    match params.get(name) {
        None => Ok([0.0, 0.0]),
        Some(value) => value
            .as_point()
            .ok_or_else(|| invalid(kind, name, "point")),
    }
}

fn positive_param(
    params: &Params,
    kind: &str,
    name: &str,
    default: f64,
) -> Result<f64, FactoryError> {
    let value = match params.get(name) {
        None => return Ok(default),
        Some(value) => value
            .as_number()
            .ok_or_else(|| invalid(kind, name, "positive number"))?,
    };
    if value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(kind, name, "positive number"))
    }
}

fn fraction_param(
    params: &Params,
    kind: &str,
    name: &str,
    default: f64,
) -> Result<f64, FactoryError> {
    let value = match params.get(name) {
        None => return Ok(default),
        Some(value) => value
            .as_number()
            .ok_or_else(|| invalid(kind, name, "number in [0, 1]"))?,
    };
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(kind, name, "number in [0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stipple_core::attr::AttrValue;

    #[test]
    fn test_builtin_catalog_is_grouped_and_sorted() {
        let registry = ShapeRegistry::builtin();
        assert_eq!(
            registry.catalog(),
            vec![
                (
                    ShapeGroup::Simple,
                    vec![
                        "circle".to_string(),
                        "ellipse".to_string(),
                        "rectangle".to_string()
                    ]
                ),
                (
                    ShapeGroup::Composite,
                    vec!["dimer".to_string(), "trimer".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_create_with_defaults() {
        let registry = ShapeRegistry::builtin();
        let circle = registry.create("circle", &Params::new()).unwrap();
        assert_eq!(circle.attribute("radius"), Some(AttrValue::Number(10.0)));
        assert_eq!(circle.center(), [0.0, 0.0]);
    }

    #[test]
    fn test_create_honors_params_and_ignores_unknown() {
        let registry = ShapeRegistry::builtin();
        let params = Params::new()
            .with("radius", 3.0)
            .with("center", [5.0, 6.0])
            .with("flavor", "ignored");
        let circle = registry.create("circle", &params).unwrap();
        assert_eq!(circle.attribute("radius"), Some(AttrValue::Number(3.0)));
        assert_eq!(circle.center(), [5.0, 6.0]);
    }

    #[test]
    fn test_mistyped_param_fails() {
        let registry = ShapeRegistry::builtin();
        let err = registry
            .create("circle", &Params::new().with("radius", "wide"))
            .unwrap_err();
        assert_eq!(
            err,
            FactoryError::InvalidParam {
                kind: "circle".into(),
                param: "radius".into(),
                expected: "positive number"
            }
        );
    }

    #[test]
    fn test_nonpositive_dimension_fails() {
        let registry = ShapeRegistry::builtin();
        let err = registry
            .create("rectangle", &Params::new().with("width", -2.0))
            .unwrap_err();
        assert_eq!(
            err,
            FactoryError::InvalidParam {
                kind: "rectangle".into(),
                param: "width".into(),
                expected: "positive number"
            }
        );
    }

    #[test]
    fn test_overlap_outside_unit_range_fails() {
        let registry = ShapeRegistry::builtin();
        let err = registry
            .create("dimer", &Params::new().with("overlap", 1.5))
            .unwrap_err();
        assert_eq!(
            err,
            FactoryError::InvalidParam {
                kind: "dimer".into(),
                param: "overlap".into(),
                expected: "number in [0, 1]"
            }
        );
    }

    #[test]
    fn test_unknown_kind_lists_both_groups() {
        let registry = ShapeRegistry::builtin();
        let err = registry.create("hexamer", &Params::new()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("simple: [circle, ellipse, rectangle]"));
        assert!(message.contains("composite: [dimer, trimer]"));
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = ShapeRegistry::new();
        assert!(registry.is_empty());
        registry.register(
            "pinhole",
            ShapeGroup::Simple,
            Box::new(|_| Ok(Box::new(Circle::new(0.5)))),
        );
        assert!(registry.contains("pinhole"));
        let particle = registry.create("pinhole", &Params::new()).unwrap();
        assert_eq!(particle.attribute("radius"), Some(AttrValue::Number(0.5)));
        assert_eq!(
            registry.catalog(),
            vec![(ShapeGroup::Simple, vec!["pinhole".to_string()])]
        );
    }
}
