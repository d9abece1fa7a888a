use thiserror::Error;

/// Classified errors reported by the platform authenticator.
///
/// The first five variants mirror the platform's own error codes; `Transport`
/// covers anything that is not an authenticator error at all (system or
/// transport failure) and carries only its description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticatorError {
    /// The user dismissed the authorization prompt
    #[error("Authorization was canceled by the user")]
    Canceled,

    /// Authenticator-internal failure
    #[error("Authorization failed: {0}")]
    Failed(String),

    /// Malformed response from the platform layer
    #[error("Invalid response from the authorization controller: {0}")]
    InvalidResponse(String),

    /// No authenticator could satisfy the request
    #[error("Authorization request was not handled")]
    NotHandled,

    /// Unclassified authenticator error
    #[error("An unknown authorization error occurred: {0}")]
    Unknown(String),

    /// Not an authenticator error: transport or system failure
    #[error("{0}")]
    Transport(String),
}
