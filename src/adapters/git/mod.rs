//! Git integration adapter
//!
//! Implements `VersionControl` by running git commands in a fixed working
//! directory. git lists unmerged paths relative to the repository root, so
//! the working directory must be that root; see
//! [`ResolverConfig::discover`].
//!
//! - [`unmerged`] - Parsing of the unmerged path listing

pub mod unmerged;

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use log::debug;

use crate::config::{DEFAULT_GIT, ResolverConfig};
use crate::core::ports::{VcsError, VersionControl};

pub use unmerged::{LIST_UNMERGED_ARGS, parse_name_list};

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
    /// git executable
    program: String,
}

impl GitVersionControl {
    /// Create a new git adapter for a working tree
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            program: DEFAULT_GIT.to_string(),
        }
    }

    /// Create a git adapter from resolved configuration
    #[must_use]
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(&config.repository).with_program(&config.git)
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The working tree commands run in
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The git executable
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Get the repository root path
    pub fn repo_root(&self) -> Result<PathBuf, VcsError> {
        let args = ["rev-parse", "--show-toplevel"];
        let output = self.run(&args)?;
        let root = String::from_utf8(output.stdout).map_err(|_| VcsError::InvalidOutput {
            command: self.describe(&args),
        })?;
        Ok(PathBuf::from(root.trim()))
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// Run git, failing only if the process cannot be started
    fn output(&self, args: &[&str]) -> Result<Output, VcsError> {
        debug!("running {} in {}", self.describe(args), self.workdir.display());
        Command::new(&self.program)
            .current_dir(&self.workdir)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| VcsError::Spawn {
                command: self.describe(args),
                source,
            })
    }

    /// Run git and turn a failing exit status into [`VcsError::CommandFailed`]
    fn run(&self, args: &[&str]) -> Result<Output, VcsError> {
        let output = self.output(args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(VcsError::CommandFailed {
                command: self.describe(args),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for GitVersionControl {
    fn default() -> Self {
        Self::new(".")
    }
}

impl VersionControl for GitVersionControl {
    fn list_unmerged(&self) -> Result<Vec<String>, VcsError> {
        let output = self.run(&LIST_UNMERGED_ARGS)?;
        let stdout = String::from_utf8(output.stdout).map_err(|_| VcsError::InvalidOutput {
            command: self.describe(&LIST_UNMERGED_ARGS),
        })?;
        Ok(parse_name_list(&stdout))
    }

    fn take_theirs(&self, path: &str) -> Result<(), VcsError> {
        self.run(&["checkout", "--theirs", "--", path]).map(|_| ())
    }

    fn stage_path(&self, path: &str) -> Result<(), VcsError> {
        self.run(&["add", "--", path]).map(|_| ())
    }
}
