//! Error types for collection operations

use crate::factory::FactoryError;
use thiserror::Error;

/// Collection engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManagerError {
    /// Name lookup missed
    #[error("no particle is named {name:?}")]
    UnknownName { name: String },

    /// Positional access outside the sequence
    #[error("position {position} is out of bounds for {len} particles")]
    OutOfBounds { position: usize, len: usize },

    /// Boolean mask does not cover the sequence exactly
    #[error("mask has {mask_len} flags but the collection holds {len} particles")]
    MaskLength { mask_len: usize, len: usize },

    /// An add or rebuild would repeat an existing name
    #[error("particle {position} is already named {name:?}")]
    DuplicateName { name: String, position: usize },

    /// Merge found names present in both operands
    #[error("{count} duplicate particle names: {names:?}")]
    DuplicateNames { count: usize, names: Vec<String> },

    /// Projection or sort hit an entry without the requested attribute
    #[error("particle {name:?} has no attribute {attribute:?}")]
    MissingAttribute { attribute: String, name: String },

    /// Keyed replacement was requested; the surface only mutates through
    /// add and delete
    #[error("item assignment is not supported; use add and delete instead")]
    AssignmentUnsupported,

    /// Label grid dimensions do not match the supplied buffer
    #[error("label image of {width}x{height} expects {expected} values, got {got}")]
    LabelGrid {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// The particle factory refused a kind-tag construction
    #[error(transparent)]
    Factory(#[from] FactoryError),
}

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, ManagerError>;
