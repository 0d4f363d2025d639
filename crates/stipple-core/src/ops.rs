//! Whole-set algebra over particle collections.
//!
//! Free functions over two sets; [`crate::ParticleSet`] forwards to them
//! through its `merged` and `difference` methods. Results are always new
//! sets carrying the left operand's naming policy and factory.

use std::collections::HashSet;

use tracing::debug;

use crate::entry::NamedParticle;
use crate::error::{ManagerError, Result};
use crate::manager::ParticleSet;

/// Conflict and ordering knobs for [`merge`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Interleave the two sequences instead of appending `b` after `a`.
    pub alternate: bool,
    /// On a name collision keep `b`'s entry instead of failing.
    pub overwrite: bool,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alternating(mut self) -> Self {
        self.alternate = true;
        self
    }

    pub fn overwriting(mut self) -> Self {
        self.overwrite = true;
        self
    }
}

/// Combine two sets into a new one.
///
/// Names shared by both operands are collisions. Without `overwrite` any
/// collision fails the whole merge, reporting every shared name; with it,
/// `b`'s entry replaces `a`'s. Plain ordering is `a` then `b`, so `b`
/// paints over `a` wherever a renderer draws the result in sequence.
/// `alternate` interleaves instead: one from `a`, one from `b`, with the
/// longer operand's tail appended once the shorter runs out.
pub fn merge(a: &ParticleSet, b: &ParticleSet, options: MergeOptions) -> Result<ParticleSet> {
    let b_names: HashSet<&str> = b.iter().map(|entry| entry.name()).collect();
    let shared: Vec<String> = a
        .iter()
        .map(|entry| entry.name().to_string())
        .filter(|name| b_names.contains(name.as_str()))
        .collect();
    if !shared.is_empty() && !options.overwrite {
        return Err(ManagerError::DuplicateNames {
            count: shared.len(),
            names: shared,
        });
    }

    let shared_names: HashSet<&str> = shared.iter().map(String::as_str).collect();
    let kept: Vec<NamedParticle> = a
        .iter()
        .filter(|entry| !shared_names.contains(entry.name()))
        .cloned()
        .collect();
    let incoming: Vec<NamedParticle> = b.iter().cloned().collect();

    let entries = if options.alternate {
        interleave(kept, incoming)
    } else {
        kept.into_iter().chain(incoming).collect()
    };
    debug!(
        len = entries.len(),
        replaced = shared_names.len(),
        "merged particle sets"
    );
    Ok(ParticleSet::from_parts(a.factory(), a.naming(), entries))
}

/// Entries of `a` whose names do not appear in `b`, as a new set.
///
/// Only names matter; two entries with the same name but different
/// particles still cancel.
pub fn subtract(a: &ParticleSet, b: &ParticleSet) -> ParticleSet {
    let b_names: HashSet<&str> = b.iter().map(|entry| entry.name()).collect();
    let entries: Vec<NamedParticle> = a
        .iter()
        .filter(|entry| !b_names.contains(entry.name()))
        .cloned()
        .collect();
    ParticleSet::from_parts(a.factory(), a.naming(), entries)
}

/// Alternate one entry from each side, then append whichever tail is left.
fn interleave(a: Vec<NamedParticle>, b: Vec<NamedParticle>) -> Vec<NamedParticle> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (first, second) => {
                out.extend(first);
                out.extend(second);
            }
        }
    }
    out
}
