//! # Armadio (Account onboarding & OTP sign-in)
//!
//! `armadio` is the authentication slice of the Armadio file storage
//! platform. It exposes the sign-up/sign-in submission boundary and drives
//! the account-creation workflow against a hosted backend (document store +
//! email one-time-token mechanism).
//!
//! ## Account model
//!
//! An account is "created" on every successful submission: the workflow
//! looks the user up by email, always issues a fresh email OTP, and only
//! persists a new user document when the email is unknown. The identifier
//! returned by the OTP issuance is the account identifier handed back to the
//! caller.
//!
//! - **Email normalization:** emails are trimmed and lowercased before
//!   validation, lookup, and persistence.
//! - **At-most-once creation:** the lookup/create sequence is serialized per
//!   email within the process; the store itself enforces no uniqueness.
//! - **Existing users:** a fresh OTP identifier is returned but never written
//!   back to the stored document.
//!
//! Session management, OTP verification, and rate limiting are out of scope
//! for this service.

pub mod account;
pub mod api;
pub mod appwrite;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
