//! The registration identity shared by a run's test cases.
//!
//! The valid-registration case creates an account that the duplicate and
//! login cases rely on. Instead of leaving that coupling implicit in a
//! hard-coded username, the identity is generated once per run and passed to
//! every case explicitly through the case context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static IDENTITY_SEQ: AtomicU64 = AtomicU64::new(1);

/// One set of registration credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Login username, also used as the password by convention of the suite
    pub username: String,
    /// Display name entered in the `name` field
    pub display_name: String,
    pub email: String,
    pub password: String,
}

impl Identity {
    /// Generate a fresh identity, unique per run and per call.
    ///
    /// Uniqueness means a rerun against the same application does not collide
    /// with accounts created by earlier runs.
    pub fn unique() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let seq = IDENTITY_SEQ.fetch_add(1, Ordering::SeqCst);
        let username = format!("user{}{:03}", millis % 1_000_000, seq % 1000);
        Self::from_username(username)
    }

    /// The documented `user1` data set, for runs against a fresh database
    /// where the historical scenario values are expected
    pub fn fixed() -> Self {
        Self {
            username: "user1".to_string(),
            display_name: "user1".to_string(),
            email: "user1@gmail.com".to_string(),
            password: "user1".to_string(),
        }
    }

    /// A derived identity that cannot collide with this one.
    ///
    /// Cases that must not touch the shared account (invalid email, password
    /// mismatch, unknown username) use suffixed variants.
    pub fn with_suffix(&self, tag: &str) -> Self {
        Self::from_username(format!("{}{}", self.username, tag))
    }

    fn from_username(username: String) -> Self {
        Self {
            display_name: username.clone(),
            email: format!("{}@gmail.com", username),
            password: username.clone(),
            username,
        }
    }
}
