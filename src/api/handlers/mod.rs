//! API handlers and shared validation helpers.
//!
//! Validation runs at the submission boundary, before any remote call; the
//! account workflow receives normalized, already-validated input.

pub mod auth;
pub mod health;
pub mod root;

use regex::Regex;

/// Bounds for sign-up full names, in Unicode scalar values.
pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const FULL_NAME_MAX_CHARS: usize = 50;

/// Normalize an email for lookup/uniqueness checks.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Lightweight email sanity check used before any remote call.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Sign-up full names must stay within the 2..=50 character window.
#[must_use]
pub fn valid_full_name(full_name: &str) -> bool {
    let chars = full_name.chars().count();
    (FULL_NAME_MIN_CHARS..=FULL_NAME_MAX_CHARS).contains(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" Jane@Example.COM "), "jane@example.com");
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("jane@example.com"));
        assert!(valid_email("name.surname@example.co"));
    }

    #[test]
    fn valid_email_rejects_missing_parts() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing-at.example.com"));
        assert!(!valid_email("missing-domain@"));
        assert!(!valid_email("spaces in@example.com"));
    }

    #[test]
    fn valid_full_name_enforces_window() {
        assert!(!valid_full_name(""));
        assert!(!valid_full_name("J"));
        assert!(valid_full_name("Jo"));
        assert!(valid_full_name("Jane Doe"));
        assert!(valid_full_name(&"a".repeat(50)));
        assert!(!valid_full_name(&"a".repeat(51)));
    }

    #[test]
    fn valid_full_name_counts_scalars_not_bytes() {
        // Two characters, six bytes
        assert!(valid_full_name("åß"));
    }
}
