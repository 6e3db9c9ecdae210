//! Console report rendering.
//!
//! A fixed-width table, one row per outcome, plus a one-line tally. Pure
//! functions of the ledger; the binary decides where the text goes.

use super::types::{Ledger, TestStatus};

const NAME_WIDTH: usize = 32;
const STATUS_WIDTH: usize = 10;
const RULE_WIDTH: usize = 80;

/// Per-status totals for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

/// Count outcomes by status
pub fn tally(ledger: &Ledger) -> Tally {
    let mut counts = Tally {
        passed: 0,
        failed: 0,
        errored: 0,
    };
    for outcome in ledger {
        match outcome.status {
            TestStatus::Passed => counts.passed += 1,
            TestStatus::Failed => counts.failed += 1,
            TestStatus::Errored => counts.errored += 1,
        }
    }
    counts
}

/// Render the summary table for a completed run
pub fn render(ledger: &Ledger) -> String {
    let mut out = String::new();
    out.push_str("\n=== TEST RESULTS ===\n");
    out.push_str(&format!(
        "{:<name$} {:<status$} {}\n",
        "Test Case",
        "Status",
        "Message",
        name = NAME_WIDTH,
        status = STATUS_WIDTH,
    ));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for outcome in ledger {
        out.push_str(&format!(
            "{:<name$} {:<status$} {}\n",
            outcome.name,
            outcome.status.to_string(),
            outcome.message,
            name = NAME_WIDTH,
            status = STATUS_WIDTH,
        ));
    }

    let counts = tally(ledger);
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{} passed, {} failed, {} errored ({} total)\n",
        counts.passed,
        counts.failed,
        counts.errored,
        ledger.len()
    ));
    out
}
