mod client;
mod errors;
mod types;

pub use client::{CredentialVerifier, HttpCredentialVerifier};
pub use errors::VerificationError;
pub use types::VerificationPayload;
