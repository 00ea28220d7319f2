//! Progress reporting port
//!
//! The resolver announces each step as it happens so a console front end
//! can print lines immediately instead of waiting for the final report.

use crate::core::models::FailureRecord;

/// A step of a resolution run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveEvent<'a> {
    /// The initial conflict list was read
    Listed {
        /// Number of conflicted paths
        total: usize,
    },
    /// Checkouts are about to start
    Resolving {
        /// Number of paths that will be checked out
        count: usize,
    },
    /// git refused a checkout
    Failed(&'a FailureRecord),
    /// Every checkout has been attempted
    Resolved {
        /// Number of refused checkouts
        failed: usize,
    },
    /// The conflict list was read again after resolution
    Remaining(&'a [String]),
}

/// Receiver for [`ResolveEvent`]s
pub trait Progress {
    /// Handle one event
    fn event(&mut self, event: &ResolveEvent<'_>) -> std::io::Result<()>;
}

/// Progress sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn event(&mut self, _event: &ResolveEvent<'_>) -> std::io::Result<()> {
        Ok(())
    }
}
