//! Merge workflow tests
//!
//! Each test starts from `conflicted_repo()`: three unmerged paths, one of
//! which git cannot check out from theirs.

use super::*;

/// Kept paths stay conflicted, the rest are taken from theirs and staged
#[test]
fn test_keep_flag_leaves_path_conflicted() {
    let temp = conflicted_repo();
    let repo = temp.path();

    take_theirs()
        .args(["--keep", "keep.ts"])
        .current_dir(repo)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Total remaining conflicts: 3\nResolving 2 files with --theirs...\n",
        ))
        .stdout(predicate::str::contains("  FAIL: gone.txt: "))
        .stdout(predicate::str::contains("\n\nFailed count: 1\n"))
        .stdout(predicate::str::ends_with("Remaining conflicts: 2\n  gone.txt\n  keep.ts\n"));

    assert_eq!(fs::read_to_string(repo.join("a.txt")).unwrap(), "theirs\n");
    let kept = fs::read_to_string(repo.join("keep.ts")).unwrap();
    assert!(kept.contains("<<<<<<<"));
    assert_eq!(unmerged(repo), vec!["gone.txt", "keep.ts"]);
}

/// The keep list is read from .take-theirs.toml when no flag is given
#[test]
fn test_keep_list_from_config_file() {
    let temp = conflicted_repo();
    let repo = temp.path();
    fs::write(repo.join(".take-theirs.toml"), "keep = [\"keep.ts\", \"gone.txt\"]\n").unwrap();

    take_theirs()
        .current_dir(repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolving 1 files with --theirs...\n"))
        .stdout(predicate::str::contains("FAIL").not())
        .stdout(predicate::str::contains("Failed count: 0\n"))
        .stdout(predicate::str::ends_with("Remaining conflicts: 2\n  gone.txt\n  keep.ts\n"));
}

/// Failure messages are cut to 80 characters
#[test]
fn test_failure_message_length() {
    let temp = conflicted_repo();

    let output = take_theirs().current_dir(temp.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.lines().find(|l| l.starts_with("  FAIL: gone.txt: ")).unwrap();
    let message = line.trim_start_matches("  FAIL: gone.txt: ");
    assert!(!message.is_empty());
    assert!(message.chars().count() <= 80);
}

/// --repo operates on a working tree other than the current directory
#[test]
fn test_repo_flag() {
    let temp = conflicted_repo();
    let elsewhere = TempDir::new().unwrap();

    take_theirs()
        .arg("--repo")
        .arg(temp.path())
        .args(["-k", "keep.ts,gone.txt"])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Remaining conflicts: 2\n  gone.txt\n  keep.ts\n"));

    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "theirs\n");
}

/// --json prints the full report instead of progress lines
#[test]
fn test_json_report() {
    let temp = conflicted_repo();

    let output = take_theirs()
        .args(["--json", "--keep", "keep.ts"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["kept"], serde_json::json!(["keep.ts"]));
    assert_eq!(report["resolved"], serde_json::json!(["a.txt"]));
    assert_eq!(report["failed"][0]["path"], "gone.txt");
    assert_eq!(report["remaining"], serde_json::json!(["gone.txt", "keep.ts"]));
}

/// A second run only sees what the first one left behind
#[test]
fn test_second_run_is_stable() {
    let temp = conflicted_repo();
    let repo = temp.path();

    take_theirs().args(["--keep", "keep.ts"]).current_dir(repo).assert().success();

    take_theirs()
        .args(["--keep", "keep.ts"])
        .current_dir(repo)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Total remaining conflicts: 2\nResolving 1 files with --theirs...\n",
        ))
        .stdout(predicate::str::ends_with("Remaining conflicts: 2\n  gone.txt\n  keep.ts\n"));
}

// =============================================================================
// RUNS BELOW THE REPOSITORY ROOT
// =============================================================================

/// git lists paths from the top level, so a run from a subdirectory must
/// still check them out there
#[test]
fn test_run_from_subdirectory() {
    let temp = conflicted_repo();
    let repo = temp.path();
    fs::create_dir_all(repo.join("sub")).unwrap();

    take_theirs()
        .args(["--keep", "keep.ts"])
        .current_dir(repo.join("sub"))
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL: a.txt").not())
        .stdout(predicate::str::contains("Failed count: 1\n"))
        .stdout(predicate::str::ends_with("Remaining conflicts: 2\n  gone.txt\n  keep.ts\n"));

    assert_eq!(fs::read_to_string(repo.join("a.txt")).unwrap(), "theirs\n");
    assert_eq!(unmerged(repo), vec!["gone.txt", "keep.ts"]);
}

/// --repo pointing at a subdirectory still finds the config at the root
#[test]
fn test_repo_flag_subdirectory_uses_root_config() {
    let temp = conflicted_repo();
    let repo = temp.path();
    fs::create_dir_all(repo.join("sub")).unwrap();
    fs::write(repo.join(".take-theirs.toml"), "keep = [\"keep.ts\"]\n").unwrap();
    let elsewhere = TempDir::new().unwrap();

    take_theirs()
        .arg("--repo")
        .arg(repo.join("sub"))
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolving 2 files with --theirs...\n"))
        .stdout(predicate::str::contains("FAIL: keep.ts").not())
        .stdout(predicate::str::ends_with("Remaining conflicts: 2\n  gone.txt\n  keep.ts\n"));

    let kept = fs::read_to_string(repo.join("keep.ts")).unwrap();
    assert!(kept.contains("<<<<<<<"));
}

// =============================================================================
// NON-ASCII PATHS
// =============================================================================

/// Non-ASCII names are listed unquoted, so they can be resolved and kept
#[test]
fn test_non_ascii_paths() {
    let temp = TempDir::new().unwrap();
    let repo = temp.path();
    init_git_repo(repo);

    write_files(repo, &[("café.txt", "base\n"), ("naïve.ts", "base\n")]);
    assert!(git(repo, &["add", "."]));
    assert!(git(repo, &["commit", "-m", "base"]));
    assert!(git(repo, &["branch", "feature"]));

    write_files(repo, &[("café.txt", "ours\n"), ("naïve.ts", "ours\n")]);
    assert!(git(repo, &["commit", "-am", "ours"]));

    assert!(git(repo, &["checkout", "feature"]));
    write_files(repo, &[("café.txt", "theirs\n"), ("naïve.ts", "theirs\n")]);
    assert!(git(repo, &["commit", "-am", "theirs"]));

    assert!(git(repo, &["checkout", "-"]));
    assert!(!git(repo, &["merge", "feature"]));

    take_theirs()
        .args(["--keep", "naïve.ts"])
        .current_dir(repo)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Total remaining conflicts: 2\nResolving 1 files with --theirs...\n",
        ))
        .stdout(predicate::str::contains("Failed count: 0\n"))
        .stdout(predicate::str::ends_with("Remaining conflicts: 1\n  naïve.ts\n"));

    assert_eq!(fs::read_to_string(repo.join("café.txt")).unwrap(), "theirs\n");
}
