use async_trait::async_trait;

use super::errors::AuthenticatorError;
use super::types::{CredentialRequest, PlatformCredential, PresentationAnchor};

/// Seam to the platform credential authenticator.
///
/// `perform` is asynchronous and user-interactive: it may block on biometric
/// or PIN entry, device selection, or explicit cancellation, and it resolves
/// to exactly one credential or exactly one classified error per submission.
/// The platform layer owns timeout and cancellation; the coordinator imposes
/// neither.
///
/// Implementations wrap whatever credential manager the target OS provides.
/// The completion may be delivered from a different execution context than
/// the initiating call; the coordinator is safe to drive from there.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync + 'static {
    async fn perform(
        &self,
        requests: &[CredentialRequest],
        anchor: PresentationAnchor,
    ) -> Result<PlatformCredential, AuthenticatorError>;
}
