//! passkey-ceremony - Client-side authentication ceremony coordination
//!
//! This crate coordinates passkey sign-in, password fallback sign-in, and
//! passkey sign-up ceremonies against a relying-party domain, mediating
//! between the application, a platform credential authenticator, and the
//! server's challenge and verification endpoints.

mod authenticator;
mod ceremony;
mod challenge;
mod config;
mod events;
mod utils;
mod verification;

#[cfg(test)]
mod test_utils;

pub use ceremony::{
    AuthenticationOutcome, CeremonyCoordinator, CeremonyError, CeremonyKind, CeremonyState,
};

pub use authenticator::{
    AssertionCredential, AssertionRequest, AuthenticatorError, CredentialRequest,
    PasswordCredential, PasswordRequest, PlatformAuthenticator, PlatformCredential,
    PresentationAnchor, PublicKeyCredentialUserEntity, RegistrationCredential,
    RegistrationRequest,
};

pub use challenge::{Challenge, ChallengeError, ChallengeSource, HttpChallengeSource};

pub use events::{AuthEvent, OutcomeNotifier};

pub use verification::{
    CredentialVerifier, HttpCredentialVerifier, VerificationError, VerificationPayload,
};

pub use utils::{UtilError, gen_random_string};

/// Validate required environment variables early.
///
/// Forces the configuration statics so a missing `ORIGIN` fails at startup
/// instead of mid-ceremony.
pub fn init() {
    let _ = *config::PASSKEY_RP_ID;
    let _ = *config::PASSKEY_RP_NAME;
}
