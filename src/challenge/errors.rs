use thiserror::Error;

/// Errors from challenge acquisition.
#[derive(Debug, Error, Clone)]
pub enum ChallengeError {
    /// The server could not be reached or answered with an error status
    #[error("Challenge unavailable: {0}")]
    Unavailable(String),

    /// The server answered with an empty body
    #[error("Server returned an empty challenge")]
    Empty,
}
