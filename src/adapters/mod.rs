//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - `VersionControl` backed by the `git` command line
//!
//! The console side of the `Progress` port lives in [`crate::output`].

pub mod git;
