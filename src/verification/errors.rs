use thiserror::Error;

/// Errors from the post-ceremony server verification step.
#[derive(Debug, Error, Clone)]
pub enum VerificationError {
    /// The server examined the credential and rejected it
    #[error("Server rejected the credential: {0}")]
    Rejected(String),

    /// The server could not be reached
    #[error("Verification transport error: {0}")]
    Transport(String),

    /// The payload could not be serialized
    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),
}
