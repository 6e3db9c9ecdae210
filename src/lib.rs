//! authcheck - Browser-driven acceptance testing for registration and login flows.
//!
//! This crate provides:
//! - A single managed headless-Chromium session (Chrome DevTools Protocol)
//! - A fault-isolating test runner with pass/fail/error classification
//! - Marker-based page assertions with bounded waits instead of fixed sleeps
//! - Run artifact management (log file, metadata) under a results directory
//!
//! # Example
//!
//! ```rust,no_run
//! use authcheck::browser::{BrowserSession, SessionConfig};
//! use authcheck::cases::{CaseContext, Identity, all_cases};
//! use authcheck::harness::{render, run_suite};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let browser = BrowserSession::open("http://127.0.0.1:8000/", SessionConfig::default()).await?;
//! let mut cx = CaseContext {
//!     browser,
//!     identity: Identity::unique(),
//!     submit_wait: std::time::Duration::from_secs(5),
//! };
//! let ledger = run_suite(&mut cx, &all_cases()).await;
//! print!("{}", render(&ledger));
//! cx.browser.close().await;
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod cases;
pub mod config;
pub mod harness;
pub mod session;

// Re-export browser session types
pub use browser::{BrowserError, BrowserResult, BrowserSession, Locator, SessionConfig};

// Re-export harness types
pub use harness::{
    CaseError, CaseResult, Ledger, TestCase, TestOutcome, TestStatus, classify, render, run_one,
    run_suite, tally,
};

// Re-export the suite and its context
pub use cases::{CaseContext, Identity, all_cases};

// Re-export run artifact management
pub use session::{RunSession, cleanup_old_runs, list_runs};
