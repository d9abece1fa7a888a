use async_trait::async_trait;

use super::errors::VerificationError;
use super::types::VerificationPayload;
use crate::config::{ORIGIN, PASSKEY_VERIFY_PATH};

/// Server-side verification of a resolved ceremony.
///
/// The coordinator declares a ceremony `Completed` only after this step
/// accepts. Signature and attestation checking happen server-side; this is
/// purely the client half of that exchange.
#[async_trait]
pub trait CredentialVerifier: Send + Sync + 'static {
    async fn verify(&self, payload: &VerificationPayload) -> Result<(), VerificationError>;
}

/// Verifier backed by the relying-party server's verify endpoint.
///
/// Posts the payload as JSON; a 2xx status is acceptance, anything else is
/// rejection.
pub struct HttpCredentialVerifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCredentialVerifier {
    /// Build a verifier against `{ORIGIN}{PASSKEY_VERIFY_PATH}`.
    pub fn new() -> Self {
        Self::with_endpoint(format!("{}{}", *ORIGIN, *PASSKEY_VERIFY_PATH))
    }

    /// Build a verifier against an explicit endpoint URL.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl Default for HttpCredentialVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialVerifier for HttpCredentialVerifier {
    async fn verify(&self, payload: &VerificationPayload) -> Result<(), VerificationError> {
        tracing::debug!("Posting verification payload to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| VerificationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Server rejected credential with status {}", status);
            return Err(VerificationError::Rejected(status.to_string()));
        }

        tracing::debug!("Server accepted credential");
        Ok(())
    }
}
