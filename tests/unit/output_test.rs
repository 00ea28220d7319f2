//! Tests for the Output module
//!
//! Human mode streams progress lines; JSON mode serializes the final report.

use take_theirs::core::models::{FailureRecord, ResolutionReport};
use take_theirs::core::ports::{Progress, ResolveEvent};
use take_theirs::output::{HumanPrinter, OutputMode};

use crate::common::paths;

fn render(events: &[ResolveEvent<'_>]) -> String {
    let mut printer = HumanPrinter::new(Vec::new());
    for event in events {
        printer.event(event).unwrap();
    }
    String::from_utf8(printer.into_inner()).unwrap()
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// HumanPrinter Tests
// =============================================================================

#[test]
fn human_header_lines() {
    let out = render(&[ResolveEvent::Listed { total: 7 }, ResolveEvent::Resolving { count: 5 }]);
    assert_eq!(out, "Total remaining conflicts: 7\nResolving 5 files with --theirs...\n");
}

#[test]
fn human_failure_line() {
    let record = FailureRecord::new("src/x.ts", "error: path 'src/x.ts' does not have their version\n");
    let out = render(&[ResolveEvent::Failed(&record)]);
    assert_eq!(out, "  FAIL: src/x.ts: error: path 'src/x.ts' does not have their version\n");
}

#[test]
fn human_summary_has_blank_line_before_failed_count() {
    let out = render(&[ResolveEvent::Resolved { failed: 2 }]);
    assert_eq!(out, "\nFailed count: 2\n");
}

#[test]
fn human_remaining_lists_each_path() {
    let remaining = paths(&["keep.ts", "c.txt"]);
    let out = render(&[ResolveEvent::Remaining(&remaining)]);
    assert_eq!(out, "Remaining conflicts: 2\n  keep.ts\n  c.txt\n");
}

// =============================================================================
// ResolutionReport Serialization Tests
// =============================================================================

#[test]
fn report_serialization() {
    let report = ResolutionReport {
        total: 3,
        kept: paths(&["keep.ts"]),
        resolved: paths(&["a.txt"]),
        failed: vec![FailureRecord::new("c.txt", "error: nope")],
        remaining: paths(&["keep.ts", "c.txt"]),
    };

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["kept"][0], "keep.ts");
    assert_eq!(value["resolved"][0], "a.txt");
    assert_eq!(value["failed"][0]["path"], "c.txt");
    assert_eq!(value["failed"][0]["message"], "error: nope");
    assert_eq!(value["remaining"].as_array().unwrap().len(), 2);

    let back: ResolutionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
