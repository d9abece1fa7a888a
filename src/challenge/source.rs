use async_trait::async_trait;

use super::errors::ChallengeError;
use super::types::Challenge;
use crate::config::{ORIGIN, PASSKEY_CHALLENGE_PATH};

/// Source of fresh ceremony challenges.
///
/// Each call must yield a challenge the server has never issued before; that
/// is the server's responsibility and is not verifiable client-side. The core
/// imposes no retry policy, callers decide.
#[async_trait]
pub trait ChallengeSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<Challenge, ChallengeError>;
}

/// Challenge source backed by the relying-party server's challenge endpoint.
///
/// Issues a parameterless GET and takes the response body as the opaque
/// challenge bytes.
pub struct HttpChallengeSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChallengeSource {
    /// Build a source against `{ORIGIN}{PASSKEY_CHALLENGE_PATH}`.
    pub fn new() -> Self {
        Self::with_endpoint(format!("{}{}", *ORIGIN, *PASSKEY_CHALLENGE_PATH))
    }

    /// Build a source against an explicit endpoint URL.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl Default for HttpChallengeSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChallengeSource for HttpChallengeSource {
    async fn fetch(&self) -> Result<Challenge, ChallengeError> {
        tracing::debug!("Fetching challenge from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ChallengeError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ChallengeError::Unavailable(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ChallengeError::Unavailable(e.to_string()))?;

        let challenge = Challenge::new(body.to_vec())?;
        tracing::debug!("Received {} byte challenge", challenge.as_bytes().len());

        Ok(challenge)
    }
}
