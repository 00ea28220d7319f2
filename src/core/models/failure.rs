//! Failed checkouts

use serde::{Deserialize, Serialize};

/// Longest error message kept in a [`FailureRecord`], in characters
pub const MAX_MESSAGE_CHARS: usize = 80;

/// A path whose "take theirs" checkout was refused by git
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// The conflicted path
    pub path: String,
    /// git's error output, trimmed and cut to [`MAX_MESSAGE_CHARS`]
    pub message: String,
}

impl FailureRecord {
    /// Build a record from git's raw stderr
    #[must_use]
    pub fn new(path: impl Into<String>, stderr: &str) -> Self {
        Self {
            path: path.into(),
            message: truncate_message(stderr.trim(), MAX_MESSAGE_CHARS),
        }
    }
}

/// Keep at most `max` characters of `message`
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
#[must_use]
pub fn truncate_message(message: &str, max: usize) -> String {
    message.chars().take(max).collect()
}
