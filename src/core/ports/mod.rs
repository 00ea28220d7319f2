//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the resolution logic
//! and the outside world (git, the console).
//!
//! Implementations live in the `adapters` and `output` modules.
//!
//! ## Design Principle
//!
//! The resolver depends only on these traits, never on concrete
//! implementations, so unit tests can drive it with a fake git.

mod progress;
mod vcs;

pub use progress::{Progress, ResolveEvent, Silent};
#[cfg(test)]
pub use vcs::MockVersionControl;
pub use vcs::{VcsError, VersionControl};
