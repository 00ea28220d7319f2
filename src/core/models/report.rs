//! Resolution report

use serde::{Deserialize, Serialize};

use super::FailureRecord;

/// Summary of one resolution run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Number of conflicted paths before resolution
    pub total: usize,
    /// Conflicted paths skipped because they are in the keep set
    pub kept: Vec<String>,
    /// Paths checked out from "theirs" and handed to `git add`
    pub resolved: Vec<String>,
    /// Paths whose checkout git refused
    pub failed: Vec<FailureRecord>,
    /// Conflicted paths left after resolution
    pub remaining: Vec<String>,
}

impl ResolutionReport {
    /// Number of paths a checkout was attempted for
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.resolved.len() + self.failed.len()
    }

    /// Whether every attempted checkout succeeded and nothing is left conflicted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.remaining.is_empty()
    }
}
