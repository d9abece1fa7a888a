//! Construction of platform request descriptors for a ceremony

use crate::authenticator::{
    AssertionRequest, CredentialRequest, PasswordRequest, PublicKeyCredentialUserEntity,
    RegistrationRequest,
};
use crate::challenge::Challenge;
use crate::config::{PASSKEY_RP_ID, PASSKEY_RP_NAME, PASSKEY_TIMEOUT};
use crate::utils::{UtilError, gen_random_string};

/// Generate a fresh opaque user handle for a registration.
///
/// 32 random bytes, base64url-encoded. A handle is never reused across
/// registrations, so every sign-up ceremony gets its own.
pub(crate) fn fresh_user_handle() -> Result<String, UtilError> {
    let handle = gen_random_string(32)?;
    tracing::debug!("Generated user handle for registration: {}", handle);
    Ok(handle)
}

/// Build the request pair for a sign-in ceremony.
///
/// An assertion request over existing platform credentials and a password
/// request are dispatched together; the authenticator resolves whichever the
/// user satisfies.
pub(crate) fn build_sign_in_requests(
    challenge: Challenge,
    prefer_immediately_available: bool,
) -> Vec<CredentialRequest> {
    vec![
        CredentialRequest::Assertion(AssertionRequest {
            rp_id: PASSKEY_RP_ID.to_string(),
            challenge: challenge.into_bytes(),
            prefer_immediately_available,
            timeout: *PASSKEY_TIMEOUT,
        }),
        CredentialRequest::Password(PasswordRequest {
            rp_id: PASSKEY_RP_ID.to_string(),
        }),
    ]
}

/// Build the single registration request for a sign-up ceremony, binding the
/// display name, a fresh user handle, and the challenge.
pub(crate) fn build_sign_up_requests(
    challenge: Challenge,
    display_name: &str,
) -> Result<Vec<CredentialRequest>, UtilError> {
    let user = PublicKeyCredentialUserEntity {
        user_handle: fresh_user_handle()?,
        name: display_name.to_string(),
        display_name: display_name.to_string(),
    };

    Ok(vec![CredentialRequest::Registration(RegistrationRequest {
        rp_id: PASSKEY_RP_ID.to_string(),
        rp_name: PASSKEY_RP_NAME.to_string(),
        challenge: challenge.into_bytes(),
        user,
        timeout: *PASSKEY_TIMEOUT,
    })])
}
