//! The acceptance-test cases for the registration and login flows.
//!
//! Cases are interchangeable data as far as the harness is concerned: each is
//! a name plus a procedure that drives the browser and returns `Ok` or an
//! assertion/interaction fault. Declaration order matters — the valid
//! registration creates the account that the duplicate and login cases use —
//! and `all_cases` is the single place that order lives.

pub mod identity;
pub mod login;
pub mod markers;
pub mod registration;

pub use identity::Identity;

use std::time::Duration;

use crate::browser::{BrowserSession, Locator};
use crate::harness::TestCase;

/// Registration page path, relative to the base URL
pub const REGISTER_PATH: &str = "register.php";

/// Login page path, relative to the base URL
pub const LOGIN_PATH: &str = "login.php";

/// Classic tautology payload for the injection cases
pub const INJECTION_PAYLOAD: &str = "' OR '1'='1";

// The application's documented form identifier scheme. A rename on the
// application side is a breaking change for this suite.
pub(crate) const USERNAME: Locator = Locator::Id("username");
pub(crate) const DISPLAY_NAME: Locator = Locator::Id("name");
pub(crate) const EMAIL: Locator = Locator::Id("InputEmail");
pub(crate) const PASSWORD: Locator = Locator::Id("InputPassword");
pub(crate) const RE_PASSWORD: Locator = Locator::Id("InputRePassword");
pub(crate) const SUBMIT: Locator = Locator::Name("submit");

/// Everything a test case gets to work with
#[derive(Debug)]
pub struct CaseContext {
    /// The run's single browser session
    pub browser: BrowserSession,

    /// The run's registration identity
    pub identity: Identity,

    /// Bounded wait for an expected marker after a submit
    pub submit_wait: Duration,
}

/// The full suite, in execution order
pub fn all_cases() -> Vec<TestCase<CaseContext>> {
    vec![
        // Registration
        TestCase {
            name: "registration_valid_data",
            run: registration::valid_data,
        },
        TestCase {
            name: "registration_empty_fields",
            run: registration::empty_fields,
        },
        TestCase {
            name: "registration_invalid_email",
            run: registration::invalid_email,
        },
        TestCase {
            name: "registration_password_mismatch",
            run: registration::password_mismatch,
        },
        TestCase {
            name: "registration_duplicate_username",
            run: registration::duplicate_username,
        },
        TestCase {
            name: "registration_sql_injection",
            run: registration::sql_injection,
        },
        // Login
        TestCase {
            name: "login_valid_data",
            run: login::valid_data,
        },
        TestCase {
            name: "login_wrong_password",
            run: login::wrong_password,
        },
        TestCase {
            name: "login_empty_fields",
            run: login::empty_fields,
        },
        TestCase {
            name: "login_unknown_username",
            run: login::unknown_username,
        },
        TestCase {
            name: "login_sql_injection",
            run: login::sql_injection,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_has_eleven_cases() {
        assert_eq!(all_cases().len(), 11);
    }

    #[test]
    fn test_case_names_are_unique() {
        let cases = all_cases();
        let mut names: Vec<&str> = cases.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn test_valid_registration_runs_before_its_dependents() {
        // duplicate_username and login_valid_data assert against the account
        // created by registration_valid_data
        let names: Vec<&str> = all_cases().iter().map(|c| c.name).collect();
        let created = names
            .iter()
            .position(|n| *n == "registration_valid_data")
            .unwrap();
        let duplicate = names
            .iter()
            .position(|n| *n == "registration_duplicate_username")
            .unwrap();
        let login = names.iter().position(|n| *n == "login_valid_data").unwrap();
        assert!(created < duplicate);
        assert!(created < login);
    }

    #[test]
    fn test_field_locators_match_documented_scheme() {
        assert_eq!(USERNAME.selector(), "#username");
        assert_eq!(EMAIL.selector(), "#InputEmail");
        assert_eq!(SUBMIT.selector(), "[name='submit']");
    }
}
