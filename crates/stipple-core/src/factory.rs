//! Particle factory contract
//!
//! The engine never constructs shapes itself. Kind-tag adds go through a
//! [`ParticleFactory`] supplied at construction time; `stipple-shapes`
//! ships the registry-backed implementation, and tests plug in stubs.
//!
//! The factory also answers "what kinds exist?", grouped into simple and
//! composite families, so an unknown-kind failure can tell the caller what
//! would have worked.

use crate::attr::Params;
use crate::particle::Particle;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Family grouping used when listing registered kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeGroup {
    /// Single primitives (circle, ellipse, rectangle, region)
    Simple,
    /// Aggregates built from several primitives (dimer, trimer)
    Composite,
}

impl fmt::Display for ShapeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Composite => write!(f, "composite"),
        }
    }
}

/// Grouped listing of registered kind tags
pub type Catalog = Vec<(ShapeGroup, Vec<String>)>;

/// Render a catalog for diagnostics: `simple: [circle, ellipse]; ...`
pub fn format_catalog(catalog: &Catalog) -> String {
    let groups: Vec<String> = catalog
        .iter()
        .map(|(group, kinds)| format!("{}: [{}]", group, kinds.join(", ")))
        .collect();
    groups.join("; ")
}

/// Builds particles from kind tags and named parameters
pub trait ParticleFactory {
    /// Construct a particle of the given kind
    ///
    /// Unknown tags fail with [`FactoryError::UnknownKind`] carrying the
    /// grouped listing of everything that is registered.
    fn create(&self, kind: &str, params: &Params) -> Result<Box<dyn Particle>, FactoryError>;

    /// Registered kind tags, grouped by shape family
    fn catalog(&self) -> Catalog;
}

/// Factory failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The kind tag is not registered; the message lists what is
    #[error("{kind:?} is not a registered particle kind; choose from {catalog}")]
    UnknownKind { kind: String, catalog: String },

    /// A parameter was supplied with an unusable value
    #[error("parameter {param:?} of {kind:?} expects {expected}")]
    InvalidParam {
        kind: String,
        param: String,
        expected: &'static str,
    },
}

impl FactoryError {
    /// Convenience constructor that formats the catalog listing
    pub fn unknown_kind(kind: impl Into<String>, catalog: &Catalog) -> Self {
        Self::UnknownKind {
            kind: kind.into(),
            catalog: format_catalog(catalog),
        }
    }
}
