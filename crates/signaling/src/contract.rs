#![forbid(unsafe_code)]

//! Declared argument contracts.
//!
//! A [`Contract`] is the ordered set of parameter names a signal is emitted
//! with. Order is kept for display only; matching against slot shapes and
//! emitted arguments is by set.

use std::fmt;

/// Ordered set of distinct parameter names.
///
/// Duplicate names are dropped on construction, keeping the first
/// occurrence. An empty contract means "no arguments".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Contract {
    names: Vec<String>,
}

impl Contract {
    /// Build a contract from parameter names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    /// A contract with no parameters.
    #[must_use]
    pub const fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Parameter names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `names` is exactly this contract's name set.
    ///
    /// Repeated names in `names` count once.
    pub fn matches<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = vec![false; self.names.len()];
        for name in names {
            match self.names.iter().position(|n| n == name.as_ref()) {
                Some(idx) => seen[idx] = true,
                None => return false,
            }
        }
        seen.into_iter().all(|hit| hit)
    }
}

impl<S: Into<String>> FromIterator<S> for Contract {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in iter {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self { names }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{name}'")?;
        }
        f.write_str("]")
    }
}
