//! Component storage strategies
//!
//! [`ComponentStore`] is the small capability interface the shared [`Name`]
//! behavior is written against: read the current components, replace them,
//! report their count. Two strategies implement it with different
//! representations of the same abstract value:
//!
//! - [`ArrayStore`] keeps the ordered component sequence directly;
//! - [`StringStore`] keeps one delimiter-joined masked string and a cached
//!   component count, splitting on demand.
//!
//! [`Name`]: crate::Name

use nomen_codec::{join_masked, split_masked, Delimiter};

/// Storage capability behind a [`crate::Name`]
///
/// Components are always masked relative to the delimiter the store is used
/// with; the store moves them between its representation and the ordered
/// sequence without interpreting them further.
pub trait ComponentStore {
    /// Build a store holding `components`
    fn from_components(components: Vec<String>, delimiter: Delimiter) -> Self;

    /// Current components as an ordered sequence
    fn read(&self, delimiter: Delimiter) -> Vec<String>;

    /// Replace the current components
    fn write(&mut self, components: Vec<String>, delimiter: Delimiter);

    /// Number of components
    fn count(&self, delimiter: Delimiter) -> usize;
}

/// Component storage as an explicit ordered sequence
#[derive(Debug, Clone, Default)]
pub struct ArrayStore {
    components: Vec<String>,
}

impl ComponentStore for ArrayStore {
    fn from_components(components: Vec<String>, _delimiter: Delimiter) -> Self {
        Self { components }
    }

    fn read(&self, _delimiter: Delimiter) -> Vec<String> {
        self.components.clone()
    }

    fn write(&mut self, components: Vec<String>, _delimiter: Delimiter) {
        self.components = components;
    }

    fn count(&self, _delimiter: Delimiter) -> usize {
        self.components.len()
    }
}

/// Component storage as one delimiter-joined masked string
///
/// The component count is cached alongside the string; reads recompute the
/// sequence with an escape-aware split, writes re-join and refresh the
/// cache.
#[derive(Debug, Clone, Default)]
pub struct StringStore {
    joined: String,
    count: usize,
}

impl StringStore {
    /// Build a store directly from an already-joined masked string
    pub(crate) fn from_joined(joined: impl Into<String>, delimiter: Delimiter) -> Self {
        let joined = joined.into();
        let count = split_masked(&joined, delimiter).len();
        Self { joined, count }
    }

    /// The joined representation, as stored
    pub(crate) fn joined(&self) -> &str {
        &self.joined
    }
}

impl ComponentStore for StringStore {
    fn from_components(components: Vec<String>, delimiter: Delimiter) -> Self {
        let count = components.len();
        Self {
            joined: join_masked(&components, delimiter),
            count,
        }
    }

    fn read(&self, delimiter: Delimiter) -> Vec<String> {
        split_masked(&self.joined, delimiter)
    }

    fn write(&mut self, components: Vec<String>, delimiter: Delimiter) {
        self.count = components.len();
        self.joined = join_masked(&components, delimiter);
    }

    fn count(&self, _delimiter: Delimiter) -> usize {
        self.count
    }
}
