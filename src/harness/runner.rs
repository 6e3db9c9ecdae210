//! Fault-isolating execution of the test case sequence.
//!
//! Every registered case runs exactly once, in declaration order. A fault
//! inside one case is converted into a ledger entry and never aborts the run
//! or leaks into another case. The runner is generic over the case context so
//! classification can be exercised in tests without a live browser.

use futures::future::BoxFuture;
use tracing::{error, info, warn};

use super::types::{CaseError, CaseResult, Ledger, TestOutcome, TestStatus};

/// A named, independent test case.
///
/// The procedure signals its outcome only by returning: `Ok` means passed,
/// `Err(Assertion)` means an expectation did not hold, `Err(Interaction)`
/// means the browser could not be driven.
pub struct TestCase<Ctx> {
    /// Identity of the case, used in the ledger and the report
    pub name: &'static str,

    /// The case's procedure
    pub run: for<'a> fn(&'a mut Ctx) -> BoxFuture<'a, CaseResult<()>>,
}

impl<Ctx> std::fmt::Debug for TestCase<Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Convert a completed case's result into its ledger entry
pub fn classify(name: &str, result: CaseResult<()>) -> TestOutcome {
    match result {
        Ok(()) => TestOutcome {
            name: name.to_string(),
            status: TestStatus::Passed,
            message: String::new(),
        },
        Err(CaseError::Assertion(msg)) => TestOutcome {
            name: name.to_string(),
            status: TestStatus::Failed,
            message: msg,
        },
        Err(CaseError::Interaction(err)) => TestOutcome {
            name: name.to_string(),
            status: TestStatus::Errored,
            message: err.to_string(),
        },
    }
}

/// Run one case and append exactly one entry to the ledger.
///
/// This is the fault-isolation boundary: it never raises, whatever the case
/// does.
pub async fn run_one<Ctx>(ctx: &mut Ctx, case: &TestCase<Ctx>, ledger: &mut Ledger) {
    info!(case = case.name, "running");
    let result = (case.run)(ctx).await;
    let outcome = classify(case.name, result);
    match outcome.status {
        TestStatus::Passed => info!(case = case.name, "passed"),
        TestStatus::Failed => warn!(case = case.name, message = %outcome.message, "failed"),
        TestStatus::Errored => error!(case = case.name, message = %outcome.message, "errored"),
    }
    ledger.push(outcome);
}

/// Run every case in order and return the completed ledger.
///
/// Never short-circuits: a broken case does not keep later ones from running.
pub async fn run_suite<Ctx>(ctx: &mut Ctx, cases: &[TestCase<Ctx>]) -> Ledger {
    let mut ledger = Ledger::with_capacity(cases.len());
    for case in cases {
        run_one(ctx, case, &mut ledger).await;
    }
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::BrowserError;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type Calls = Vec<&'static str>;

    fn passes(calls: &mut Calls) -> BoxFuture<'_, CaseResult<()>> {
        Box::pin(async move {
            calls.push("passes");
            Ok(())
        })
    }

    fn fails(calls: &mut Calls) -> BoxFuture<'_, CaseResult<()>> {
        Box::pin(async move {
            calls.push("fails");
            Err(CaseError::Assertion("expected \"x\" in page".to_string()))
        })
    }

    fn errors(calls: &mut Calls) -> BoxFuture<'_, CaseResult<()>> {
        Box::pin(async move {
            calls.push("errors");
            Err(CaseError::Interaction(BrowserError::Timeout {
                what: "#username".to_string(),
                waited: Duration::from_secs(10),
            }))
        })
    }

    #[test]
    fn test_classify_pass_has_empty_message() {
        let outcome = classify("case", Ok(()));
        assert_eq!(outcome.status, TestStatus::Passed);
        assert_eq!(outcome.message, "");
    }

    #[test]
    fn test_classify_assertion_keeps_description() {
        let outcome = classify(
            "case",
            Err(CaseError::Assertion("expected \"ok\" in page".to_string())),
        );
        assert_eq!(outcome.status, TestStatus::Failed);
        assert_eq!(outcome.message, "expected \"ok\" in page");
    }

    #[test]
    fn test_classify_interaction_is_errored() {
        let outcome = classify(
            "case",
            Err(CaseError::Interaction(BrowserError::Driver(
                "connection reset".to_string(),
            ))),
        );
        assert_eq!(outcome.status, TestStatus::Errored);
        assert!(!outcome.message.is_empty());
    }

    #[tokio::test]
    async fn test_run_one_appends_exactly_one_entry() {
        let mut calls = Calls::new();
        let mut ledger = Ledger::new();
        let case = TestCase {
            name: "passes",
            run: passes,
        };

        run_one(&mut calls, &case, &mut ledger).await;
        run_one(&mut calls, &case, &mut ledger).await;

        assert_eq!(ledger.len(), 2);
        assert_eq!(calls, vec!["passes", "passes"]);
    }

    #[tokio::test]
    async fn test_run_suite_preserves_declaration_order() {
        let cases = [
            TestCase {
                name: "first",
                run: fails,
            },
            TestCase {
                name: "second",
                run: errors,
            },
            TestCase {
                name: "third",
                run: passes,
            },
        ];

        let mut calls = Calls::new();
        let ledger = run_suite(&mut calls, &cases).await;

        // Every case ran despite earlier failures, in order
        assert_eq!(calls, vec!["fails", "errors", "passes"]);
        let names: Vec<&str> = ledger.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(ledger[0].status, TestStatus::Failed);
        assert_eq!(ledger[1].status, TestStatus::Errored);
        assert_eq!(ledger[2].status, TestStatus::Passed);
    }

    #[tokio::test]
    async fn test_run_suite_all_errored_still_completes() {
        let cases = [
            TestCase {
                name: "a",
                run: errors,
            },
            TestCase {
                name: "b",
                run: errors,
            },
        ];

        let mut calls = Calls::new();
        let ledger = run_suite(&mut calls, &cases).await;
        assert_eq!(ledger.len(), 2);
        assert!(ledger.iter().all(|o| o.status == TestStatus::Errored));
        assert!(ledger.iter().all(|o| !o.message.is_empty()));
    }
}
