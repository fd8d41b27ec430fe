#![forbid(unsafe_code)]

//! Named argument bags handed to slots on emit.

use std::collections::BTreeMap;

/// Keyword arguments of a single emission.
///
/// Names are unique; adding an existing name replaces its value.
/// Iteration is in name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kwargs<V> {
    args: BTreeMap<String, V>,
}

impl<V> Default for Kwargs<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Kwargs<V> {
    /// An empty argument bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            args: BTreeMap::new(),
        }
    }

    /// Add an argument, replacing any previous value under `name`.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: V) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.args.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.args.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.args.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Kwargs<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
