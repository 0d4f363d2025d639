//! Index keys for reading and deleting
//!
//! The collection answers one read/delete surface for several key shapes:
//! a position, a span of positions, a name, a boolean mask, or a mixed list
//! of positions and names. [`Selector`] models that as a closed union so
//! resolution is a single dispatch instead of a chain of runtime type
//! checks, and `From` conversions keep call sites short:
//!
//! ```ignore
//! set.select(2)?;                    // position
//! set.select(0..3)?;                 // span
//! set.select("circle_0")?;           // name
//! set.select(vec![true, false])?;    // mask
//! set.select(vec![KeyRef::from(2), KeyRef::from("circle_0")])?;
//! ```

use crate::entry::NamedParticle;
use std::ops::Range;

/// A single-entry key inside a [`Selector::Keys`] list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRef {
    /// Zero-based position in the sequence
    Position(usize),
    /// Entry name
    Name(String),
}

impl From<usize> for KeyRef {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<&str> for KeyRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for KeyRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&NamedParticle> for KeyRef {
    fn from(entry: &NamedParticle) -> Self {
        Self::Name(entry.name().to_string())
    }
}

/// Key shapes accepted by read and delete operations
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// One position
    Position(usize),
    /// Half-open position range, clamped to the current length
    Span(Range<usize>),
    /// One entry name
    Name(String),
    /// One flag per current entry; true selects
    Mask(Vec<bool>),
    /// Mixed positions and names, resolved in caller order
    ///
    /// Order is preserved deliberately: selecting `[2, 0, 1]` is how a
    /// caller reorders a collection through indexing.
    Keys(Vec<KeyRef>),
}

impl From<usize> for Selector {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<Range<usize>> for Selector {
    fn from(span: Range<usize>) -> Self {
        Self::Span(span)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&NamedParticle> for Selector {
    fn from(entry: &NamedParticle) -> Self {
        Self::Name(entry.name().to_string())
    }
}

impl From<Vec<bool>> for Selector {
    fn from(mask: Vec<bool>) -> Self {
        Self::Mask(mask)
    }
}

impl From<&[bool]> for Selector {
    fn from(mask: &[bool]) -> Self {
        Self::Mask(mask.to_vec())
    }
}

impl From<Vec<KeyRef>> for Selector {
    fn from(keys: Vec<KeyRef>) -> Self {
        Self::Keys(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Selector::from(3), Selector::Position(3));
        assert_eq!(Selector::from("circle_0"), Selector::Name("circle_0".into()));
        assert_eq!(Selector::from(0..4), Selector::Span(0..4));
    }

    #[test]
    fn test_mask_conversion() {
        let mask = vec![true, false, true];
        assert_eq!(Selector::from(mask.clone()), Selector::Mask(mask));
    }

    #[test]
    fn test_key_list_conversion() {
        let keys = vec![KeyRef::from(2), KeyRef::from("dimer_0")];
        assert_eq!(
            Selector::from(keys.clone()),
            Selector::Keys(vec![KeyRef::Position(2), KeyRef::Name("dimer_0".into())])
        );
        assert_eq!(keys[1], KeyRef::Name("dimer_0".into()));
    }
}
