//! The expectation contract: every user-facing message the suite asserts on.
//!
//! The application's rendered copy is the interface here. Keeping all marker
//! strings in one place makes a copy change in the application a localized,
//! reviewable diff instead of silent breakage scattered across cases.
//!
//! The messages are the application's Indonesian UI copy, verbatim.

/// Registration succeeded
pub const REGISTER_OK: &str = "Pendaftaran berhasil";

/// A required field was left empty (shared by registration and login)
pub const EMPTY_FIELDS: &str = "Data tidak boleh kosong";

/// Email format rejected (the browser's "include an @" validation copy)
pub const EMAIL_FORMAT: &str = "sertakan @";

/// Password and confirmation differ
pub const PASSWORD_MISMATCH: &str = "Password tidak sama";

/// Username already registered
pub const DUPLICATE_USERNAME: &str = "Username sudah terdaftar";

/// Login succeeded
pub const LOGIN_OK: &str = "Selamat datang";

/// Login rejected for a known user; the application uses either message
pub const LOGIN_REJECTED: &[&str] = &["Login gagal", "Password salah"];

/// Login attempted with an unregistered username; either message appears
pub const UNKNOWN_USER: &[&str] = &["User tidak ditemukan", "Register User Gagal"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjunctions_have_alternatives() {
        assert_eq!(LOGIN_REJECTED.len(), 2);
        assert_eq!(UNKNOWN_USER.len(), 2);
    }

    #[test]
    fn test_success_and_rejection_markers_are_distinct() {
        // A page can legitimately contain at most one of these per scenario
        assert_ne!(REGISTER_OK, DUPLICATE_USERNAME);
        assert!(LOGIN_REJECTED.iter().all(|m| *m != LOGIN_OK));
    }
}
