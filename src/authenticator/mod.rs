mod errors;
mod platform;
mod types;

pub use errors::AuthenticatorError;
pub use platform::PlatformAuthenticator;
pub use types::{
    AssertionCredential, AssertionRequest, CredentialRequest, PasswordCredential, PasswordRequest,
    PlatformCredential, PresentationAnchor, PublicKeyCredentialUserEntity, RegistrationCredential,
    RegistrationRequest,
};
