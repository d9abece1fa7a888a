//! Central configuration for the passkey-ceremony crate
//!
//! All values are read from environment variables once, at first use.
//! `ORIGIN` is the only required variable; the relying-party identifier is
//! derived from it.

use std::{env, sync::LazyLock};

/// Origin of the relying party, e.g. `https://example.com`. Must be set.
pub(crate) static ORIGIN: LazyLock<String> =
    LazyLock::new(|| std::env::var("ORIGIN").expect("ORIGIN must be set"));

/// Relying-party identifier: `ORIGIN` with the scheme and port stripped.
pub(crate) static PASSKEY_RP_ID: LazyLock<String> = LazyLock::new(|| {
    ORIGIN
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split(':')
        .next()
        .map(|s| s.to_string())
        .expect("Could not extract RP ID from ORIGIN")
});

/// Human-readable relying-party name shown by authenticator prompts.
pub(crate) static PASSKEY_RP_NAME: LazyLock<String> =
    LazyLock::new(|| env::var("PASSKEY_RP_NAME").ok().unwrap_or(ORIGIN.clone()));

/// Timeout hint passed to the authenticator, in seconds.
pub(crate) static PASSKEY_TIMEOUT: LazyLock<u32> = LazyLock::new(|| {
    env::var("PASSKEY_TIMEOUT")
        .map(|v| v.parse::<u32>().unwrap_or(60))
        .unwrap_or(60)
});

/// Path of the server endpoint that issues ceremony challenges.
pub(crate) static PASSKEY_CHALLENGE_PATH: LazyLock<String> = LazyLock::new(|| {
    match env::var("PASSKEY_CHALLENGE_PATH").ok() {
        None => "/auth/challenge".to_string(),
        Some(v) if v.starts_with('/') => v,
        Some(invalid) => {
            tracing::warn!(
                "Invalid challenge path: {}. Using default '/auth/challenge'",
                invalid
            );
            "/auth/challenge".to_string()
        }
    }
});

/// Path of the server endpoint that verifies ceremony results.
pub(crate) static PASSKEY_VERIFY_PATH: LazyLock<String> =
    LazyLock::new(|| match env::var("PASSKEY_VERIFY_PATH").ok() {
        None => "/auth/verify".to_string(),
        Some(v) if v.starts_with('/') => v,
        Some(invalid) => {
            tracing::warn!(
                "Invalid verify path: {}. Using default '/auth/verify'",
                invalid
            );
            "/auth/verify".to_string()
        }
    });
