//! Conflict resolver
//!
//! Runs the three-step pipeline: list unmerged paths, check out "theirs"
//! for every path outside the keep set and stage it, then list again.
//!
//! Each git call blocks until it finishes and nothing is retried. A refused
//! checkout is recorded and the next path is still attempted; the outcome of
//! staging is never acted on.

use anyhow::Context;
use log::debug;

use crate::core::models::{FailureRecord, KeepSet, ResolutionReport};
use crate::core::ports::{Progress, ResolveEvent, VcsError, VersionControl};

/// Result of the checkout pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Paths checked out and staged, in processing order
    pub resolved: Vec<String>,
    /// Refused checkouts, in processing order
    pub failed: Vec<FailureRecord>,
}

/// Resolves conflicted paths by taking the incoming side
#[derive(Debug)]
pub struct ConflictResolver<V> {
    vcs: V,
    keep: KeepSet,
}

impl<V: VersionControl> ConflictResolver<V> {
    /// Create a resolver over a version control backend
    #[must_use]
    pub const fn new(vcs: V, keep: KeepSet) -> Self {
        Self { vcs, keep }
    }

    /// The version control backend
    #[must_use]
    pub const fn vcs(&self) -> &V {
        &self.vcs
    }

    /// List conflicted paths
    ///
    /// # Errors
    ///
    /// Fails if git cannot be run or its output cannot be read. There is no
    /// fallback: the caller is expected to abort.
    pub fn list_conflicts(&self) -> anyhow::Result<Vec<String>> {
        let files = self.vcs.list_unmerged().context("failed to list conflicted files")?;
        debug!("{} conflicted file(s)", files.len());
        Ok(files)
    }

    /// Check out "theirs" for each path and stage the ones that succeed
    ///
    /// Paths in the keep set are skipped even if the caller passes them.
    ///
    /// # Errors
    ///
    /// Fails if a checkout cannot be launched at all or `progress` fails to
    /// write. A checkout that git refuses is recorded in the outcome instead.
    pub fn resolve_with_theirs(
        &self,
        files: &[String],
        progress: &mut dyn Progress,
    ) -> anyhow::Result<ResolveOutcome> {
        let mut outcome = ResolveOutcome::default();

        for file in files.iter().filter(|f| !self.keep.contains(f)) {
            match self.vcs.take_theirs(file) {
                Ok(()) => {
                    if let Err(err) = self.vcs.stage_path(file) {
                        debug!("ignoring staging failure for {file}: {err}");
                    }
                    outcome.resolved.push(file.clone());
                },
                Err(VcsError::CommandFailed { stderr, .. }) => {
                    let record = FailureRecord::new(file.as_str(), &stderr);
                    debug!("checkout --theirs refused for {file}");
                    progress.event(&ResolveEvent::Failed(&record))?;
                    outcome.failed.push(record);
                },
                Err(err) => {
                    return Err(err).with_context(|| format!("failed to check out {file}"));
                },
            }
        }

        Ok(outcome)
    }

    /// List the conflicts left after resolution and announce them
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::list_conflicts`].
    pub fn report(&self, progress: &mut dyn Progress) -> anyhow::Result<Vec<String>> {
        let remaining = self.list_conflicts()?;
        progress.event(&ResolveEvent::Remaining(&remaining))?;
        Ok(remaining)
    }

    /// Run the whole pipeline
    ///
    /// # Errors
    ///
    /// Fails on any listing error or a checkout that cannot be launched.
    pub fn run(&self, progress: &mut dyn Progress) -> anyhow::Result<ResolutionReport> {
        let conflicts = self.list_conflicts()?;
        progress.event(&ResolveEvent::Listed {
            total: conflicts.len(),
        })?;

        let (to_resolve, kept) = self.keep.partition(&conflicts);
        progress.event(&ResolveEvent::Resolving {
            count: to_resolve.len(),
        })?;

        let outcome = self.resolve_with_theirs(&to_resolve, progress)?;
        progress.event(&ResolveEvent::Resolved {
            failed: outcome.failed.len(),
        })?;

        let remaining = self.report(progress)?;

        Ok(ResolutionReport {
            total: conflicts.len(),
            kept,
            resolved: outcome.resolved,
            failed: outcome.failed,
            remaining,
        })
    }
}
