use std::sync::Arc;

use tokio::sync::Mutex;

use crate::authenticator::{
    AuthenticatorError, PlatformAuthenticator, PlatformCredential, PresentationAnchor,
};
use crate::challenge::ChallengeSource;
use crate::events::{AuthEvent, OutcomeNotifier};
use crate::utils::base64url_encode;
use crate::verification::{CredentialVerifier, VerificationPayload};

use super::errors::CeremonyError;
use super::types::{AuthenticationOutcome, CeremonyKind, CeremonyState};
use super::{build_sign_in_requests, build_sign_up_requests};

/// The ceremony the coordinator is currently holding, if any.
///
/// Single-writer: mutated only under the coordinator's lock. The anchor is
/// borrowed from the application for the ceremony duration and cleared on
/// every terminal transition.
struct ActiveCeremony {
    state: CeremonyState,
    anchor: Option<PresentationAnchor>,
}

/// Owner of the authentication ceremony lifecycle.
///
/// Admits at most one ceremony at a time, fetches a challenge, builds the
/// platform request descriptors, dispatches them to the authenticator bound
/// to the caller's presentation anchor, classifies the result or error,
/// forwards successful credentials to server verification, and notifies
/// subscribers exactly once per ceremony.
///
/// A `start_*` call while a ceremony is in flight is rejected with
/// [`CeremonyError::CeremonyInFlight`] and does not touch the active anchor.
/// The ceremony outcome itself is delivered through the [`OutcomeNotifier`]:
/// `UserSignedIn` on server-accepted success, `ModalCeremonyCanceled` when
/// the user dismisses the prompt mid-ceremony. Other failures are logged and
/// reported only through the `start_*` return value, never published.
pub struct CeremonyCoordinator {
    challenges: Arc<dyn ChallengeSource>,
    authenticator: Arc<dyn PlatformAuthenticator>,
    verifier: Arc<dyn CredentialVerifier>,
    notifier: OutcomeNotifier,
    active: Mutex<ActiveCeremony>,
}

impl CeremonyCoordinator {
    pub fn new(
        challenges: Arc<dyn ChallengeSource>,
        authenticator: Arc<dyn PlatformAuthenticator>,
        verifier: Arc<dyn CredentialVerifier>,
        notifier: OutcomeNotifier,
    ) -> Self {
        Self {
            challenges,
            authenticator,
            verifier,
            notifier,
            active: Mutex::new(ActiveCeremony {
                state: CeremonyState::Idle,
                anchor: None,
            }),
        }
    }

    /// The notifier outcome events are published on.
    pub fn notifier(&self) -> &OutcomeNotifier {
        &self.notifier
    }

    /// Whether a ceremony is currently in flight.
    pub async fn is_in_flight(&self) -> bool {
        self.active.lock().await.state == CeremonyState::InFlight
    }

    /// Start a sign-in ceremony with an existing passkey or a stored
    /// password.
    ///
    /// When `prefer_immediately_available` is set, the authenticator is
    /// instructed to only surface credentials immediately available locally.
    pub async fn start_sign_in(
        &self,
        anchor: PresentationAnchor,
        prefer_immediately_available: bool,
    ) -> Result<(), CeremonyError> {
        self.admit(CeremonyKind::SignInWithPasskeyOrPassword, anchor)
            .await?;

        let challenge = self.fetch_challenge().await?;
        let requests = build_sign_in_requests(challenge, prefer_immediately_available);

        match self.authenticator.perform(&requests, anchor).await {
            Ok(credential) => self.handle_credential(credential).await,
            Err(err) => self.handle_authenticator_error(err).await,
        }
    }

    /// Start a sign-up ceremony registering a new passkey for `display_name`.
    ///
    /// A fresh, non-guessable user handle is generated per invocation and
    /// bound into the registration request together with the challenge.
    pub async fn start_sign_up(
        &self,
        anchor: PresentationAnchor,
        display_name: &str,
    ) -> Result<(), CeremonyError> {
        self.admit(CeremonyKind::SignUpWithPasskey, anchor).await?;

        let challenge = self.fetch_challenge().await?;
        let requests = match build_sign_up_requests(challenge, display_name) {
            Ok(requests) => requests,
            Err(err) => {
                self.settle(CeremonyState::Failed).await;
                return Err(CeremonyError::Utils(err).log());
            }
        };

        match self.authenticator.perform(&requests, anchor).await {
            Ok(credential) => self.handle_credential(credential).await,
            Err(err) => self.handle_authenticator_error(err).await,
        }
    }

    /// Admit a new ceremony: reject unless idle, then record the anchor and
    /// mark the ceremony in flight before any collaborator is awaited. Two
    /// racing `start_*` calls can never both observe `Idle`.
    async fn admit(
        &self,
        kind: CeremonyKind,
        anchor: PresentationAnchor,
    ) -> Result<(), CeremonyError> {
        let mut active = self.active.lock().await;
        if active.state == CeremonyState::InFlight {
            return Err(CeremonyError::CeremonyInFlight.log());
        }

        tracing::debug!("Starting ceremony: {:?}", kind);
        active.state = CeremonyState::InFlight;
        active.anchor = Some(anchor);
        Ok(())
    }

    /// Fetch the ceremony challenge. A fetch failure aborts the ceremony
    /// before dispatch: logged and returned to the caller, with no event
    /// published on either channel.
    async fn fetch_challenge(&self) -> Result<crate::challenge::Challenge, CeremonyError> {
        match self.challenges.fetch().await {
            Ok(challenge) => Ok(challenge),
            Err(err) => {
                tracing::error!("Failed to fetch challenge: {}", err);
                self.settle(CeremonyState::Failed).await;
                Err(CeremonyError::Challenge(err))
            }
        }
    }

    /// Settle the active ceremony into a terminal state, which immediately
    /// resets to idle and releases the borrowed anchor.
    async fn settle(&self, terminal: CeremonyState) {
        debug_assert!(terminal.is_terminal());
        let mut active = self.active.lock().await;
        tracing::debug!("Ceremony settled: {:?}", terminal);
        active.state = CeremonyState::Idle;
        active.anchor = None;
    }

    /// Handle the credential the authenticator resolved.
    ///
    /// Classifies it by shape, forwards it to server verification, and only
    /// on acceptance completes the ceremony and publishes `UserSignedIn`.
    pub(crate) async fn handle_credential(
        &self,
        credential: PlatformCredential,
    ) -> Result<(), CeremonyError> {
        let (payload, outcome) = match classify(credential) {
            Ok(classified) => classified,
            Err(err) => {
                self.settle(CeremonyState::Failed).await;
                return Err(err.log());
            }
        };

        if let Err(err) = self.verifier.verify(&payload).await {
            self.settle(CeremonyState::Failed).await;
            return Err(CeremonyError::Verification(err).log());
        }

        self.settle(CeremonyState::Completed).await;
        self.notifier.publish(AuthEvent::UserSignedIn(outcome));
        Ok(())
    }

    /// Handle a classified authenticator error.
    ///
    /// Cancellation while a ceremony is in flight publishes
    /// `ModalCeremonyCanceled`; a cancellation delivered while idle is logged
    /// and dropped. Every other kind is diagnostic-only.
    pub(crate) async fn handle_authenticator_error(
        &self,
        err: AuthenticatorError,
    ) -> Result<(), CeremonyError> {
        let was_in_flight = self.is_in_flight().await;

        match &err {
            AuthenticatorError::Canceled => {
                tracing::debug!("Authorization request canceled by the user");
                if was_in_flight {
                    self.settle(CeremonyState::Canceled).await;
                    self.notifier.publish(AuthEvent::ModalCeremonyCanceled);
                }
            }
            AuthenticatorError::Transport(description) => {
                // Not an authenticator error; only its description is useful.
                tracing::error!("Authorization failed: {}", description);
                if was_in_flight {
                    self.settle(CeremonyState::Failed).await;
                }
            }
            other => {
                tracing::error!("Authorization error: {}", other);
                if was_in_flight {
                    self.settle(CeremonyState::Failed).await;
                }
            }
        }

        Err(CeremonyError::Authenticator(err))
    }
}

/// Classify the returned credential into a verification payload and an
/// outcome.
///
/// The platform promised one of three shapes; anything else is an
/// unrecoverable internal-contract violation and aborts the process.
fn classify(
    credential: PlatformCredential,
) -> Result<(VerificationPayload, AuthenticationOutcome), CeremonyError> {
    match credential {
        PlatformCredential::Registration(registration) => {
            tracing::info!(
                "A new passkey was registered: {}",
                registration.credential_id
            );
            let attestation_object = base64url_encode(registration.attestation_object)?;
            Ok((
                VerificationPayload::Registration {
                    credential_id: registration.credential_id.clone(),
                    attestation_object,
                    client_data_json: registration.client_data_json,
                },
                AuthenticationOutcome::PasskeyRegistered(registration.credential_id),
            ))
        }
        PlatformCredential::Assertion(assertion) => {
            tracing::info!("A passkey was used to sign in: {}", assertion.credential_id);
            let signature = base64url_encode(assertion.signature)?;
            Ok((
                VerificationPayload::Assertion {
                    credential_id: assertion.credential_id.clone(),
                    signature,
                    client_data_json: assertion.client_data_json,
                },
                AuthenticationOutcome::PasskeyAsserted(assertion.credential_id),
            ))
        }
        PlatformCredential::Password(password) => {
            tracing::info!("A password was provided for: {}", password.username);
            Ok((
                VerificationPayload::Password {
                    username: password.username.clone(),
                    password: password.password,
                },
                AuthenticationOutcome::PasswordVerified(password.username),
            ))
        }
        PlatformCredential::Unexpected { kind } => {
            tracing::error!("Received unknown authorization type: {}", kind);
            panic!("Received unknown authorization type: {kind}");
        }
    }
}
