//! Ordered, name-addressed particle collection.
//!
//! [`ParticleSet`] is the engine's core container. It owns a sequence of
//! [`NamedParticle`] entries and keeps one invariant above all others:
//! every entry's name is unique within the set. Positions are implicit
//! (an entry's position is its index in the sequence) and every entry is
//! reachable by either key. A lazily rebuilt name-to-position map backs
//! name lookup, so bulk mutations pay for re-indexing at most once.
//!
//! Accessors never mutate. Anything that reorders, replaces, or removes
//! entries is an explicit `&mut self` method, and fallible mutations
//! validate before touching the sequence so a failed call leaves the set
//! exactly as it was.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attr::{AttrValue, Params};
use crate::config::NAME_SEPARATOR;
use crate::entry::NamedParticle;
use crate::error::{ManagerError, Result};
use crate::factory::ParticleFactory;
use crate::ops::{self, MergeOptions};
use crate::particle::Particle;
use crate::selector::{KeyRef, Selector};

/// Policy for generating a name when an insertion does not supply one.
///
/// Generated names are `kind` + separator + counter. The two modes differ
/// only in what the counter means; both are fixed for the lifetime of a
/// set and inherited by sets derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingMode {
    /// Counter is the number of same-kind entries already present, so
    /// each kind numbers independently: `circle_0, circle_1, dimer_0`.
    #[default]
    PerKind,
    /// Counter is the insertion position, shared across kinds:
    /// `circle_0, circle_1, dimer_2`.
    Sequential,
}

/// Optional knobs for a single insertion.
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    name: Option<String>,
    position: Option<usize>,
    color: Option<[u8; 3]>,
}

impl AddOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit name instead of an auto-generated one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Insert at this position instead of appending.
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Override the particle's default color.
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }
}

/// Ordered collection of uniquely named particles.
///
/// Carries the factory used to build particles from kind names, so sets
/// derived through [`select`](Self::select), sorting, or merging can keep
/// creating particles the same way as their parent.
pub struct ParticleSet {
    entries: Vec<NamedParticle>,
    /// Memoized name-to-position map. `None` means stale; rebuilt on the
    /// next name lookup, never eagerly.
    name_index: RefCell<Option<HashMap<String, usize>>>,
    naming: NamingMode,
    factory: Arc<dyn ParticleFactory>,
}

impl ParticleSet {
    /// Empty set with the default per-kind naming policy.
    pub fn new(factory: Arc<dyn ParticleFactory>) -> Self {
        Self::with_naming(factory, NamingMode::default())
    }

    pub fn with_naming(factory: Arc<dyn ParticleFactory>, naming: NamingMode) -> Self {
        Self {
            entries: Vec::new(),
            name_index: RefCell::new(None),
            naming,
            factory,
        }
    }

    /// Build a set from pre-made entries, rejecting duplicate names.
    pub fn from_entries(
        factory: Arc<dyn ParticleFactory>,
        naming: NamingMode,
        entries: Vec<NamedParticle>,
    ) -> Result<Self> {
        check_unique(&entries)?;
        Ok(Self::from_parts(factory, naming, entries))
    }

    /// Unchecked assembly for callers that already guarantee unique names.
    pub(crate) fn from_parts(
        factory: Arc<dyn ParticleFactory>,
        naming: NamingMode,
        entries: Vec<NamedParticle>,
    ) -> Self {
        Self {
            entries,
            name_index: RefCell::new(None),
            naming,
            factory,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn naming(&self) -> NamingMode {
        self.naming
    }

    pub fn factory(&self) -> Arc<dyn ParticleFactory> {
        Arc::clone(&self.factory)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedParticle> {
        self.entries.iter()
    }

    pub fn get(&self, position: usize) -> Option<&NamedParticle> {
        self.entries.get(position)
    }

    // ---- insertion ----------------------------------------------------

    /// Append a particle under an auto-generated name.
    ///
    /// Returns the name the entry ended up with.
    pub fn add(&mut self, particle: Box<dyn Particle>) -> Result<String> {
        self.add_with(particle, AddOptions::new())
    }

    /// Insert a particle with explicit options.
    ///
    /// The position must be at most the current length. A name collision
    /// fails with the position of the existing holder and leaves the set
    /// untouched.
    pub fn add_with(&mut self, particle: Box<dyn Particle>, options: AddOptions) -> Result<String> {
        let position = options.position.unwrap_or(self.entries.len());
        if position > self.entries.len() {
            return Err(ManagerError::OutOfBounds {
                position,
                len: self.entries.len(),
            });
        }
        let name = match options.name {
            Some(name) => name,
            None => self.generate_name(particle.kind(), position),
        };
        if let Some(existing) = self.lookup_position(&name) {
            return Err(ManagerError::DuplicateName {
                name,
                position: existing,
            });
        }
        let mut entry = NamedParticle::new(name.clone(), particle);
        if let Some(color) = options.color {
            entry = entry.with_color(color);
        }
        self.entries.insert(position, entry);
        self.invalidate();
        debug!(name = %name, position, "added particle");
        Ok(name)
    }

    /// Build a particle through the set's factory, then append it.
    pub fn add_kind(&mut self, kind: &str, params: &Params) -> Result<String> {
        self.add_kind_with(kind, params, AddOptions::new())
    }

    pub fn add_kind_with(
        &mut self,
        kind: &str,
        params: &Params,
        options: AddOptions,
    ) -> Result<String> {
        let particle = self.factory.create(kind, params)?;
        self.add_with(particle, options)
    }

    fn generate_name(&self, kind: &str, position: usize) -> String {
        let counter = match self.naming {
            NamingMode::Sequential => position,
            NamingMode::PerKind => self.entries.iter().filter(|e| e.kind() == kind).count(),
        };
        format!("{kind}{NAME_SEPARATOR}{counter}")
    }

    // ---- removal ------------------------------------------------------

    /// Remove and return the entry at `position`. Later entries shift
    /// down by one.
    pub fn remove(&mut self, position: usize) -> Result<NamedParticle> {
        if position >= self.entries.len() {
            return Err(ManagerError::OutOfBounds {
                position,
                len: self.entries.len(),
            });
        }
        let entry = self.entries.remove(position);
        self.invalidate();
        debug!(name = %entry.name(), position, "removed particle");
        Ok(entry)
    }

    /// Remove every entry the selector matches.
    ///
    /// All positions are resolved against the pre-deletion sequence, then
    /// the survivors are collected in one filtering pass, so multi-key
    /// deletion is immune to the index shifts it causes.
    pub fn delete<S: Into<Selector>>(&mut self, selector: S) -> Result<()> {
        let positions = self.resolve(&selector.into())?;
        let doomed: HashSet<usize> = positions.into_iter().collect();
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .enumerate()
            .filter(|(position, _)| !doomed.contains(position))
            .map(|(_, entry)| entry)
            .collect();
        self.invalidate();
        debug!(removed = doomed.len(), remaining = self.entries.len(), "deleted particles");
        Ok(())
    }

    // ---- selection ----------------------------------------------------

    /// Copy the matched entries into a new set, in match order.
    ///
    /// The result carries this set's naming policy and factory. Explicit
    /// key lists may repeat a key only if the repeats name distinct
    /// entries; selecting the same entry twice would break name
    /// uniqueness and is rejected.
    pub fn select<S: Into<Selector>>(&self, selector: S) -> Result<ParticleSet> {
        let positions = self.resolve(&selector.into())?;
        let entries: Vec<NamedParticle> = positions
            .iter()
            .map(|&position| self.entries[position].clone())
            .collect();
        Self::from_entries(Arc::clone(&self.factory), self.naming, entries)
    }

    /// Keyed replacement is deliberately unsupported; this always fails.
    /// Replace entries with [`delete`](Self::delete) plus
    /// [`add_with`](Self::add_with), or rebuild via [`map`](Self::map).
    pub fn assign<S: Into<Selector>>(
        &mut self,
        _selector: S,
        _particle: Box<dyn Particle>,
    ) -> Result<()> {
        Err(ManagerError::AssignmentUnsupported)
    }

    /// Translate a selector into concrete positions against the current
    /// sequence. Spans clamp to the valid range; everything else is
    /// strict.
    fn resolve(&self, selector: &Selector) -> Result<Vec<usize>> {
        let len = self.entries.len();
        match selector {
            Selector::Position(position) => {
                if *position < len {
                    Ok(vec![*position])
                } else {
                    Err(ManagerError::OutOfBounds {
                        position: *position,
                        len,
                    })
                }
            }
            Selector::Span(range) => {
                let start = range.start.min(len);
                let end = range.end.min(len);
                Ok((start..end).collect())
            }
            Selector::Name(name) => Ok(vec![self.position_of(name)?]),
            Selector::Mask(mask) => {
                if mask.len() != len {
                    return Err(ManagerError::MaskLength {
                        mask_len: mask.len(),
                        len,
                    });
                }
                Ok(mask
                    .iter()
                    .enumerate()
                    .filter(|(_, flag)| **flag)
                    .map(|(position, _)| position)
                    .collect())
            }
            Selector::Keys(keys) => keys
                .iter()
                .map(|key| match key {
                    KeyRef::Position(position) => {
                        if *position < len {
                            Ok(*position)
                        } else {
                            Err(ManagerError::OutOfBounds {
                                position: *position,
                                len,
                            })
                        }
                    }
                    KeyRef::Name(name) => self.position_of(name),
                })
                .collect(),
        }
    }

    // ---- projection ---------------------------------------------------

    /// Collect one attribute from every entry, in sequence order.
    ///
    /// Fails on the first entry that lacks the attribute, naming it.
    pub fn project(&self, attribute: &str) -> Result<Vec<AttrValue>> {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .lookup(attribute)
                    .ok_or_else(|| ManagerError::MissingAttribute {
                        attribute: attribute.to_string(),
                        name: entry.name().to_string(),
                    })
            })
            .collect()
    }

    /// Numeric projection. An entry whose value is present but not
    /// numeric counts as missing the attribute.
    pub fn project_numbers(&self, attribute: &str) -> Result<Vec<f64>> {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .lookup(attribute)
                    .and_then(|value| value.as_number())
                    .ok_or_else(|| ManagerError::MissingAttribute {
                        attribute: attribute.to_string(),
                        name: entry.name().to_string(),
                    })
            })
            .collect()
    }

    // ---- reordering ---------------------------------------------------

    /// New set sorted by an attribute, ascending and stable. Every entry
    /// must carry the attribute or the sort fails before anything is
    /// built.
    pub fn sorted_by(&self, attribute: &str) -> Result<ParticleSet> {
        let keys = self.project(attribute)?;
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| keys[a].compare(&keys[b]));
        let entries = order
            .iter()
            .map(|&position| self.entries[position].clone())
            .collect();
        Ok(Self::from_parts(
            Arc::clone(&self.factory),
            self.naming,
            entries,
        ))
    }

    /// In-place variant of [`sorted_by`](Self::sorted_by). The sorted
    /// sequence is computed in full before the swap, so a failed sort
    /// leaves the set untouched.
    pub fn sort_by(&mut self, attribute: &str) -> Result<()> {
        let sorted = self.sorted_by(attribute)?;
        self.entries = sorted.entries;
        self.invalidate();
        Ok(())
    }

    /// Replace every entry with `f(entry)`, in order.
    ///
    /// The full replacement sequence is built and name-checked before it
    /// is swapped in.
    pub fn map<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&NamedParticle) -> NamedParticle,
    {
        let replaced: Vec<NamedParticle> = self.entries.iter().map(|entry| f(entry)).collect();
        check_unique(&replaced)?;
        self.entries = replaced;
        self.invalidate();
        Ok(())
    }

    /// Reverse the sequence in place.
    pub fn reverse(&mut self) {
        self.entries.reverse();
        self.invalidate();
    }

    // ---- views --------------------------------------------------------

    /// Entry names in sequence order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }

    /// Borrowed particles in sequence order.
    pub fn particles(&self) -> Vec<&dyn Particle> {
        self.entries.iter().map(|entry| entry.particle()).collect()
    }

    /// Center coordinates in sequence order.
    pub fn centers(&self) -> Vec<[f64; 2]> {
        self.entries.iter().map(|entry| entry.center()).collect()
    }

    /// Distinct kind tags, ordered by first appearance.
    pub fn kinds(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut kinds = Vec::new();
        for entry in &self.entries {
            if seen.insert(entry.kind().to_string()) {
                kinds.push(entry.kind().to_string());
            }
        }
        kinds
    }

    /// Entry count per kind tag.
    pub fn kind_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.kind().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Position of the entry with this name.
    pub fn position_of(&self, name: &str) -> Result<usize> {
        self.lookup_position(name)
            .ok_or_else(|| ManagerError::UnknownName {
                name: name.to_string(),
            })
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.lookup_position(name).is_some()
    }

    // ---- set algebra --------------------------------------------------

    /// Merge with another set; see [`ops::merge`].
    pub fn merged(&self, other: &ParticleSet, options: MergeOptions) -> Result<ParticleSet> {
        ops::merge(self, other, options)
    }

    /// Entries of `self` whose names do not appear in `other`; see
    /// [`ops::subtract`].
    pub fn difference(&self, other: &ParticleSet) -> ParticleSet {
        ops::subtract(self, other)
    }

    // ---- name index ---------------------------------------------------

    fn lookup_position(&self, name: &str) -> Option<usize> {
        let mut cached = self.name_index.borrow_mut();
        let index = cached.get_or_insert_with(|| {
            self.entries
                .iter()
                .enumerate()
                .map(|(position, entry)| (entry.name().to_string(), position))
                .collect()
        });
        index.get(name).copied()
    }

    fn invalidate(&mut self) {
        *self.name_index.get_mut() = None;
    }
}

impl Clone for ParticleSet {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            name_index: RefCell::new(None),
            naming: self.naming,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl std::fmt::Debug for ParticleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSet")
            .field("len", &self.entries.len())
            .field("naming", &self.naming)
            .field("names", &self.names())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a NamedParticle;
    type IntoIter = std::slice::Iter<'a, NamedParticle>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn check_unique(entries: &[NamedParticle]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (position, entry) in entries.iter().enumerate() {
        if let Some(&existing) = seen.get(entry.name()) {
            return Err(ManagerError::DuplicateName {
                name: entry.name().to_string(),
                position: existing,
            });
        }
        seen.insert(entry.name(), position);
    }
    Ok(())
}
