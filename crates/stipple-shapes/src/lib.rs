//! Built-in shape families for Stipple
//!
//! This crate provides the concrete particles the collection engine
//! manages but never interprets: simple primitives, multi-lobed
//! aggregates, and the registry that builds them from kind tags.
//!
//! # Shape Families
//!
//! - **Simple**: Circle, Ellipse, Rectangle
//! - **Composite**: Dimer, Trimer
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use stipple_core::ParticleSet;
//! use stipple_shapes::ShapeRegistry;
//!
//! let mut set = ParticleSet::new(Arc::new(ShapeRegistry::builtin()));
//! set.add_kind("circle", &Params::new().with("radius", 4.0))?;
//! ```

pub mod composite;
pub mod registry;
pub mod simple;

pub use composite::{Dimer, Trimer};
pub use registry::{Constructor, ShapeRegistry};
pub use simple::{Circle, Ellipse, Rectangle};
