use crate::browser::BrowserError;

/// Classification of a completed test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    /// The case's procedure completed without raising
    Passed,

    /// An explicit expectation about page content did not hold
    Failed,

    /// Any other fault during execution (lookup timeout, navigation error, ...)
    Errored,
}

impl TestStatus {
    /// The symbol shown in the report table
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✅",
            TestStatus::Failed => "❌",
            TestStatus::Errored => "⚠️",
        }
    }

    /// The label shown in the report table
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
            TestStatus::Errored => "ERROR",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol(), self.label())
    }
}

/// The recorded result of running one test case.
///
/// Exactly one of these is produced per case per run; the message is empty
/// iff the case passed.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    /// Name of the test case
    pub name: String,

    /// Pass/fail/error classification
    pub status: TestStatus,

    /// The failure or error description; empty on pass
    pub message: String,
}

/// Ordered, append-only record of all outcomes for a run
pub type Ledger = Vec<TestOutcome>;

/// Result type for test case procedures
pub type CaseResult<T> = Result<T, CaseError>;

/// A fault raised inside a test case's procedure
#[derive(Debug)]
pub enum CaseError {
    /// An expectation about page content did not hold; recorded as `Failed`
    Assertion(String),

    /// A fault while driving the browser; recorded as `Errored`
    Interaction(BrowserError),
}

impl std::fmt::Display for CaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseError::Assertion(msg) => write!(f, "{}", msg),
            CaseError::Interaction(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaseError::Assertion(_) => None,
            CaseError::Interaction(err) => Some(err),
        }
    }
}

impl From<BrowserError> for CaseError {
    fn from(err: BrowserError) -> Self {
        CaseError::Interaction(err)
    }
}

// ============================================================================
// Expectation helpers
// ============================================================================

/// Assert that `marker` appears in the page text
pub fn expect_present(page: &str, marker: &str) -> CaseResult<()> {
    if page.contains(marker) {
        Ok(())
    } else {
        Err(CaseError::Assertion(format!(
            "expected \"{}\" in page",
            marker
        )))
    }
}

/// Assert that `marker` does not appear in the page text
pub fn expect_absent(page: &str, marker: &str) -> CaseResult<()> {
    if page.contains(marker) {
        Err(CaseError::Assertion(format!(
            "expected \"{}\" to be absent from page",
            marker
        )))
    } else {
        Ok(())
    }
}

/// Assert that at least one of `markers` appears in the page text
pub fn expect_any(page: &str, markers: &[&str]) -> CaseResult<()> {
    if markers.iter().any(|m| page.contains(m)) {
        Ok(())
    } else {
        Err(CaseError::Assertion(format!(
            "expected one of {:?} in page",
            markers
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_expect_present() {
        assert!(expect_present("Pendaftaran berhasil!", "Pendaftaran berhasil").is_ok());

        let err = expect_present("nothing here", "Pendaftaran berhasil").unwrap_err();
        assert!(matches!(err, CaseError::Assertion(_)));
        assert!(err.to_string().contains("Pendaftaran berhasil"));
    }

    #[test]
    fn test_expect_absent() {
        assert!(expect_absent("nothing here", "Selamat datang").is_ok());
        assert!(expect_absent("Selamat datang, user1", "Selamat datang").is_err());
    }

    #[test]
    fn test_expect_any() {
        let markers = ["Login gagal", "Password salah"];
        assert!(expect_any("... Password salah ...", &markers).is_ok());
        assert!(expect_any("... Login gagal ...", &markers).is_ok());

        let err = expect_any("welcome", &markers).unwrap_err();
        assert!(err.to_string().contains("Login gagal"));
    }

    #[test]
    fn test_case_error_from_browser_error() {
        let err: CaseError = BrowserError::Timeout {
            what: "#username".to_string(),
            waited: Duration::from_secs(10),
        }
        .into();
        assert!(matches!(err, CaseError::Interaction(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TestStatus::Passed.label(), "PASSED");
        assert_eq!(TestStatus::Failed.label(), "FAILED");
        assert_eq!(TestStatus::Errored.label(), "ERROR");
    }
}
