//! Keep set
//!
//! Paths listed here are left conflicted for manual resolution.

use std::collections::BTreeSet;

/// Relative paths excluded from automatic resolution
///
/// Matching is exact string equality against the path as git prints it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepSet {
    paths: BTreeSet<String>,
}

impl KeepSet {
    /// Create an empty keep set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths: BTreeSet::new(),
        }
    }

    /// Add a path, ignoring surrounding whitespace and blank entries
    pub fn insert(&mut self, path: &str) {
        let path = path.trim();
        if !path.is_empty() {
            self.paths.insert(path.to_string());
        }
    }

    /// Check whether a path is kept
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of kept paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing is kept
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Split a conflict list into `(to_resolve, kept)`
    ///
    /// Both halves keep the order of `files`.
    #[must_use]
    pub fn partition(&self, files: &[String]) -> (Vec<String>, Vec<String>) {
        let (kept, to_resolve): (Vec<String>, Vec<String>) =
            files.iter().cloned().partition(|f| self.contains(f));
        (to_resolve, kept)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeepSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for KeepSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path.as_ref());
        }
    }
}
