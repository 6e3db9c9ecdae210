pub mod report;
pub mod runner;
pub mod types;

pub use report::{Tally, render, tally};
pub use runner::{TestCase, classify, run_one, run_suite};
pub use types::{
    CaseError, CaseResult, Ledger, TestOutcome, TestStatus, expect_absent, expect_any,
    expect_present,
};
