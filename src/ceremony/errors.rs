//! Error types for ceremony coordination

use thiserror::Error;

use crate::authenticator::AuthenticatorError;
use crate::challenge::ChallengeError;
use crate::utils::UtilError;
use crate::verification::VerificationError;

/// Errors that can occur while coordinating an authentication ceremony.
///
/// Only `CeremonyInFlight` prevents a ceremony from starting; the others
/// report why a started ceremony settled without a `UserSignedIn` event.
/// Subscribers on the outcome channel are only told about cancellation, so
/// the return value of `start_*` is where non-cancellation failures surface
/// to the caller.
#[derive(Debug, Error)]
pub enum CeremonyError {
    /// A ceremony is already in flight; the new request was rejected before
    /// touching the active anchor
    #[error("A ceremony is already in flight")]
    CeremonyInFlight,

    /// Challenge acquisition failed; the ceremony was aborted before dispatch
    #[error("Challenge error: {0}")]
    Challenge(#[from] ChallengeError),

    /// The authenticator reported a classified error
    #[error("Authenticator error: {0}")]
    Authenticator(#[from] AuthenticatorError),

    /// The server refused to verify the credential
    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl CeremonyError {
    /// Log the error and return self
    ///
    /// Allows method chaining so call sites log exactly where the error is
    /// raised.
    pub fn log(self) -> Self {
        match &self {
            Self::CeremonyInFlight => tracing::error!("A ceremony is already in flight"),
            Self::Challenge(err) => tracing::error!("Challenge error: {}", err),
            Self::Authenticator(err) => tracing::error!("Authenticator error: {}", err),
            Self::Verification(err) => tracing::error!("Verification error: {}", err),
            Self::Utils(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}
