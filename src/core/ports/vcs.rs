//! Version control system port
//!
//! Defines the three git capabilities the resolver needs.

use thiserror::Error;

/// Errors raised by a [`VersionControl`] implementation
#[derive(Debug, Error)]
pub enum VcsError {
    /// The command could not be started (binary missing, bad working directory)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted
        command: String,
        /// Underlying launch error
        #[source]
        source: std::io::Error,
    },

    /// The command ran and reported failure through its exit status
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        /// The command line that failed
        command: String,
        /// Exit status as reported by the OS
        status: String,
        /// Trimmed standard error output
        stderr: String,
    },

    /// The command succeeded but its output could not be read as UTF-8
    #[error("`{command}` produced output that is not valid UTF-8")]
    InvalidOutput {
        /// The command line whose output was rejected
        command: String,
    },
}

/// Version control system abstraction
///
/// Implementations handle interactions with git or a test double.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// List paths with unresolved merge conflicts, in git's order
    fn list_unmerged(&self) -> Result<Vec<String>, VcsError>;

    /// Replace a conflicted path with the incoming ("theirs") version
    fn take_theirs(&self, path: &str) -> Result<(), VcsError>;

    /// Stage a path
    fn stage_path(&self, path: &str) -> Result<(), VcsError>;
}
