//! Business logic services
//!
//! Orchestration logic that drives the port traits.
//!
//! - [`resolver`] - List, resolve and re-list conflicted paths

pub mod resolver;

pub use resolver::{ConflictResolver, ResolveOutcome};
