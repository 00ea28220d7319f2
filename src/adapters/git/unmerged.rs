//! Unmerged path listing
//!
//! Parses the output of `git diff --name-only --diff-filter=U`.
//!
//! Paths are relative to the repository root. `core.quotePath` is switched
//! off so non-ASCII names come back as-is instead of C-quoted octal escapes;
//! git still quotes names containing control characters or `"`.

/// Arguments that make git print one unmerged path per line
pub const LIST_UNMERGED_ARGS: [&str; 5] =
    ["-c", "core.quotePath=false", "diff", "--name-only", "--diff-filter=U"];

/// Split git's line-oriented output into trimmed, non-empty paths
///
/// Order is preserved.
#[must_use]
pub fn parse_name_list(stdout: &str) -> Vec<String> {
    stdout.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
}
