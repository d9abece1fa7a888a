//! Test utilities: shared environment initialization and collaborator
//! doubles
//!
//! Every test that touches configuration calls [`init_test_environment`]
//! first so the `LazyLock` statics resolve against `.env_test` values. The
//! doubles are scripted implementations of the three collaborator traits the
//! coordinator is generic over.

use std::sync::{Arc, Mutex as StdMutex, Once};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::authenticator::{
    AssertionCredential, AuthenticatorError, CredentialRequest, PasswordCredential,
    PlatformAuthenticator, PlatformCredential, PresentationAnchor, RegistrationCredential,
};
use crate::challenge::{Challenge, ChallengeError, ChallengeSource};
use crate::verification::{CredentialVerifier, VerificationError, VerificationPayload};

/// Load `.env_test` (falling back to `.env`) once per process and make sure
/// the variables the config statics require are present.
pub(crate) fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
        if std::env::var("ORIGIN").is_err() {
            unsafe {
                std::env::set_var("ORIGIN", "https://example.com");
            }
        }
    });
}

/// Challenge source resolving to a scripted result.
pub(crate) struct StubChallengeSource {
    result: Result<Vec<u8>, ChallengeError>,
}

impl StubChallengeSource {
    pub(crate) fn ok(bytes: Vec<u8>) -> Self {
        Self { result: Ok(bytes) }
    }

    pub(crate) fn err(err: ChallengeError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ChallengeSource for StubChallengeSource {
    async fn fetch(&self) -> Result<Challenge, ChallengeError> {
        match &self.result {
            Ok(bytes) => Challenge::new(bytes.clone()),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Authenticator resolving immediately to a scripted result, recording every
/// submission it sees.
pub(crate) struct StubAuthenticator {
    result: Result<PlatformCredential, AuthenticatorError>,
    submissions: StdMutex<Vec<(Vec<CredentialRequest>, PresentationAnchor)>>,
}

impl StubAuthenticator {
    pub(crate) fn ok(credential: PlatformCredential) -> Self {
        Self {
            result: Ok(credential),
            submissions: StdMutex::new(Vec::new()),
        }
    }

    pub(crate) fn err(err: AuthenticatorError) -> Self {
        Self {
            result: Err(err),
            submissions: StdMutex::new(Vec::new()),
        }
    }

    pub(crate) fn submissions(&self) -> Vec<(Vec<CredentialRequest>, PresentationAnchor)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformAuthenticator for StubAuthenticator {
    async fn perform(
        &self,
        requests: &[CredentialRequest],
        anchor: PresentationAnchor,
    ) -> Result<PlatformCredential, AuthenticatorError> {
        self.submissions
            .lock()
            .unwrap()
            .push((requests.to_vec(), anchor));
        self.result.clone()
    }
}

/// Authenticator that parks inside `perform` until released, standing in for
/// the user-interactive suspension point.
pub(crate) struct BlockingAuthenticator {
    credential: PlatformCredential,
    performing: Notify,
    release: Notify,
    submissions: StdMutex<Vec<(Vec<CredentialRequest>, PresentationAnchor)>>,
}

impl BlockingAuthenticator {
    pub(crate) fn new(credential: PlatformCredential) -> Self {
        Self {
            credential,
            performing: Notify::new(),
            release: Notify::new(),
            submissions: StdMutex::new(Vec::new()),
        }
    }

    /// Wait until a ceremony has reached the authenticator.
    pub(crate) async fn wait_until_performing(&self) {
        self.performing.notified().await;
    }

    /// Let the parked `perform` call resolve.
    pub(crate) fn release(&self) {
        self.release.notify_one();
    }

    pub(crate) fn submissions(&self) -> Vec<(Vec<CredentialRequest>, PresentationAnchor)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformAuthenticator for BlockingAuthenticator {
    async fn perform(
        &self,
        requests: &[CredentialRequest],
        anchor: PresentationAnchor,
    ) -> Result<PlatformCredential, AuthenticatorError> {
        self.submissions
            .lock()
            .unwrap()
            .push((requests.to_vec(), anchor));
        let released = self.release.notified();
        self.performing.notify_one();
        released.await;
        Ok(self.credential.clone())
    }
}

/// Verifier resolving to a scripted verdict, recording every payload.
pub(crate) struct StubVerifier {
    verdict: Result<(), VerificationError>,
    payloads: Arc<StdMutex<Vec<VerificationPayload>>>,
}

impl StubVerifier {
    pub(crate) fn accepting() -> Self {
        Self {
            verdict: Ok(()),
            payloads: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    pub(crate) fn rejecting(err: VerificationError) -> Self {
        Self {
            verdict: Err(err),
            payloads: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    /// Handle onto the recorded payloads that stays valid after the verifier
    /// has been moved into a coordinator.
    pub(crate) fn payloads_handle(&self) -> Arc<StdMutex<Vec<VerificationPayload>>> {
        self.payloads.clone()
    }
}

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify(&self, payload: &VerificationPayload) -> Result<(), VerificationError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.verdict.clone()
    }
}

pub(crate) fn password_credential(username: &str) -> PlatformCredential {
    PlatformCredential::Password(PasswordCredential {
        username: username.to_string(),
        password: "correct horse battery staple".to_string(),
    })
}

pub(crate) fn assertion_credential(credential_id: &str) -> PlatformCredential {
    PlatformCredential::Assertion(AssertionCredential {
        credential_id: credential_id.to_string(),
        signature: vec![0x30, 0x44, 0x02, 0x20],
        client_data_json: r#"{"type":"webauthn.get"}"#.to_string(),
        user_handle: None,
    })
}

pub(crate) fn registration_credential(credential_id: &str) -> PlatformCredential {
    PlatformCredential::Registration(RegistrationCredential {
        credential_id: credential_id.to_string(),
        attestation_object: vec![0xA3, 0x63, 0x66, 0x6D, 0x74],
        client_data_json: r#"{"type":"webauthn.create"}"#.to_string(),
    })
}
