//! Resolver configuration
//!
//! The resolver is built from a [`ResolverConfig`]: the working tree, the
//! keep set and the git executable. Values come from, in order of precedence,
//! command-line flags, a `.take-theirs.toml` file at the repository root, and
//! built-in defaults.
//!
//! ```toml
//! keep = ["src/agents/bash-tools.exec.ts"]
//! git = "git"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::adapters::git::GitVersionControl;
use crate::core::models::KeepSet;

/// Config file name looked up at the repository root
pub const CONFIG_FILE: &str = ".take-theirs.toml";

/// git executable used when none is configured
pub const DEFAULT_GIT: &str = "git";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys
    #[error("invalid config in {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a `.take-theirs.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Paths left conflicted for manual resolution
    #[serde(default)]
    pub keep: Vec<String>,
    /// git executable
    #[serde(default)]
    pub git: Option<String>,
}

impl ConfigFile {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `.take-theirs.toml` from a repository root, if present
    pub fn discover(repository: &Path) -> Result<Option<Self>, ConfigError> {
        let path = repository.join(CONFIG_FILE);
        if path.is_file() { Self::load(&path).map(Some) } else { Ok(None) }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Working tree (defaults to the current directory)
    pub repository: Option<PathBuf>,
    /// Explicit config file; disables discovery
    pub config_file: Option<PathBuf>,
    /// Extra kept paths, added to the file's list
    pub keep: Vec<String>,
    /// git executable, replacing the file's value
    pub git: Option<String>,
}

/// Everything the resolver and git adapter need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Working tree to operate on
    pub repository: PathBuf,
    /// Paths never resolved automatically
    pub keep: KeepSet,
    /// git executable
    pub git: String,
}

impl ResolverConfig {
    /// Config for a working tree with an empty keep set
    #[must_use]
    pub fn new(repository: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
            keep: KeepSet::new(),
            git: DEFAULT_GIT.to_string(),
        }
    }

    /// Add kept paths
    #[must_use]
    pub fn with_keep<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keep.extend(paths);
        self
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_git(mut self, program: impl Into<String>) -> Self {
        self.git = program.into();
        self
    }

    /// Apply a config file on top of this config
    #[must_use]
    pub fn with_file(self, file: ConfigFile) -> Self {
        let config = self.with_keep(file.keep);
        match file.git {
            Some(git) => config.with_git(git),
            None => config,
        }
    }

    /// Find the repository root, then build the config from there
    ///
    /// `overrides.repository` may be any directory inside the working tree.
    /// git reports unmerged paths relative to the top level, so that is where
    /// commands run and where `.take-theirs.toml` is looked up. The root is
    /// found with the `--git` override or the default git, since the config
    /// file is only readable once the root is known.
    pub fn discover(overrides: Overrides) -> anyhow::Result<Self> {
        let start = overrides.repository.clone().unwrap_or_else(|| PathBuf::from("."));
        let root = GitVersionControl::new(&start)
            .with_program(overrides.git.as_deref().unwrap_or(DEFAULT_GIT))
            .repo_root()
            .with_context(|| format!("failed to find the repository root from {}", start.display()))?;
        debug!("repository root {}", root.display());

        Ok(Self::resolve(Overrides {
            repository: Some(root),
            ..overrides
        })?)
    }

    /// Build the effective config from command-line overrides
    ///
    /// `overrides.repository` is used as given. An explicit `config_file` must
    /// exist; otherwise `.take-theirs.toml` is picked up from the repository
    /// directory when present.
    pub fn resolve(overrides: Overrides) -> Result<Self, ConfigError> {
        let repository = overrides.repository.unwrap_or_else(|| PathBuf::from("."));

        let file = match &overrides.config_file {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::discover(&repository)?,
        };

        let mut config = Self::new(repository).with_keep(overrides.keep);
        if let Some(file) = file {
            config = config.with_file(file);
        }
        if let Some(git) = overrides.git {
            config = config.with_git(git);
        }
        Ok(config)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
