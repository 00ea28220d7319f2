//! Core domain logic for take-theirs
//!
//! This module contains the resolution logic with no direct I/O.
//! All interactions with git and the console go through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`KeepSet`, `FailureRecord`, `ResolutionReport`)
//! - `services/` - The `ConflictResolver` pipeline
//! - `ports/` - Trait definitions for git and progress reporting

pub mod models;
pub mod ports;
pub mod services;
