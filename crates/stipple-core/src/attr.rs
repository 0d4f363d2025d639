//! Attribute values and constructor parameters
//!
//! Particles expose their measurable state as named attributes: a circle has
//! a `radius`, a labeled region has an `area`, every particle has a center.
//! [`AttrValue`] is the tagged value type those attributes share, and the
//! same type doubles as the argument values handed to a particle factory
//! through [`Params`].
//!
//! Keeping the value space closed (numbers, integers, points, colors, text)
//! is what lets projection return homogeneous columns and lets sorting
//! compare entries without runtime type inspection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A single attribute value read off a particle or passed to a factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Floating-point scalar (radius, area, perimeter, ...)
    Number(f64),
    /// Integer scalar (label values, lobe counts, ...)
    Int(i64),
    /// 2-D coordinate, `[x, y]`
    Point([f64; 2]),
    /// RGB display color
    Color([u8; 3]),
    /// Textual value (names, kind tags)
    Text(String),
}

impl AttrValue {
    /// Try to get as a floating-point number
    ///
    /// Integers widen to `f64`, so numeric comparisons and masks work
    /// across both scalar variants.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as a point
    pub fn as_point(&self) -> Option<[f64; 2]> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Try to get as a color
    pub fn as_color(&self) -> Option<[u8; 3]> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Total ordering across attribute values, used by stable sorts
    ///
    /// Numeric variants compare by value (an `Int` equals the same
    /// `Number`); other variants compare within their kind; mixed kinds
    /// fall back to a fixed kind order so a sort never panics.
    pub fn compare(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.total_cmp(&b);
        }
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a[0]
                .total_cmp(&b[0])
                .then_with(|| a[1].total_cmp(&b[1])),
            (Self::Color(a), Self::Color(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Number(_) | Self::Int(_) => 0,
            Self::Point(_) => 1,
            Self::Color(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<[f64; 2]> for AttrValue {
    fn from(p: [f64; 2]) -> Self {
        Self::Point(p)
    }
}

impl From<[u8; 3]> for AttrValue {
    fn from(c: [u8; 3]) -> Self {
        Self::Color(c)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Named constructor arguments for a particle factory
///
/// The map is ordered so diagnostics and serialized forms are stable.
/// Factories read the parameters they understand and fall back to their
/// own defaults for the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, AttrValue>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter by name
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Get a numeric parameter
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(AttrValue::as_number)
    }

    /// Get a point parameter
    pub fn point(&self, key: &str) -> Option<[f64; 2]> {
        self.0.get(key).and_then(AttrValue::as_point)
    }

    /// Whether no parameters were supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of supplied parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over parameters in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
