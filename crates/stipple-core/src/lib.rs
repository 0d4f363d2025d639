//! Stipple Core - Named particle collection engine
//!
//! Stipple manages ordered collections of named particles: shapes, blobs,
//! labeled regions, anything that can report a kind tag, a center, and
//! named attributes. The engine does the bookkeeping that every particle
//! workload needs and nothing else: unique naming, dual position/name
//! addressing, selection, projection, ordering, and set algebra.
//!
//! # Core Philosophy
//!
//! ```text
//! Shape Crates → Particle trait → ParticleSet → Tables / Projections
//!                                      ↑
//!                           Factory / Naming Policy
//! ```
//!
//! The collection is canonical. What a particle *is* stays behind the
//! [`Particle`] trait, so geometry, rasterization, and rendering live in
//! the crates that define shapes, never here.
//!
//! # Addressing
//!
//! Every entry is reachable by position and by name at all times. The two
//! key spaces are kept consistent by a lazily rebuilt name index, and all
//! read/delete surfaces accept either key shape (or spans, masks, and
//! mixed key lists) through [`Selector`].

pub mod attr;
pub mod config;
pub mod entry;
pub mod error;
pub mod factory;
pub mod label;
pub mod manager;
pub mod ops;
pub mod particle;
pub mod selector;
pub mod table;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use attr::{AttrValue, Params};
pub use entry::NamedParticle;
pub use error::{ManagerError, Result};
pub use factory::{Catalog, FactoryError, ParticleFactory, ShapeGroup};
pub use label::{from_label_image, LabelImage, RegionParticle};
pub use manager::{AddOptions, NamingMode, ParticleSet};
pub use ops::{merge, subtract, MergeOptions};
pub use particle::Particle;
pub use selector::{KeyRef, Selector};
pub use table::{format_table, summarize, Align, TableOptions};
