//! Domain models for take-theirs
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`KeepSet`] - Paths that are never resolved automatically
//! - [`FailureRecord`] - A checkout that git refused
//! - [`ResolutionReport`] - Summary of one resolution run

mod failure;
mod keep_set;
mod report;

pub use failure::{FailureRecord, MAX_MESSAGE_CHARS, truncate_message};
pub use keep_set::KeepSet;
pub use report::ResolutionReport;
