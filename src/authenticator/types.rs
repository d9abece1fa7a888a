use serde::{Deserialize, Serialize};

/// Opaque handle to the UI surface the authenticator prompt attaches to.
///
/// Owned by the application and borrowed for the ceremony duration; the
/// coordinator clears it on every terminal transition and never dereferences
/// it. The caller guarantees the underlying surface outlives the ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationAnchor(u64);

impl PresentationAnchor {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// User entity bound into a registration request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntity {
    pub user_handle: String,
    pub name: String,
    pub display_name: String,
}

/// Request for an assertion over an existing platform credential.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssertionRequest {
    pub rp_id: String,
    pub challenge: Vec<u8>,
    /// When set, the authenticator must only surface credentials that are
    /// immediately available locally: no network-backed credential lookup
    /// and no user-presence prompt fallback.
    pub prefer_immediately_available: bool,
    pub timeout: u32,
}

/// Request for a stored password credential.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest {
    pub rp_id: String,
}

/// Request to register a new platform credential.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub rp_id: String,
    pub rp_name: String,
    pub challenge: Vec<u8>,
    pub user: PublicKeyCredentialUserEntity,
    pub timeout: u32,
}

/// One platform-specific request descriptor.
///
/// A sign-in ceremony dispatches an assertion request and a password request
/// together; the authenticator resolves whichever the user satisfies. A
/// sign-up ceremony dispatches exactly one registration request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialRequest {
    Assertion(AssertionRequest),
    Password(PasswordRequest),
    Registration(RegistrationRequest),
}

/// A newly registered platform credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCredential {
    pub credential_id: String,
    pub attestation_object: Vec<u8>,
    pub client_data_json: String,
}

/// An assertion over an existing platform credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionCredential {
    pub credential_id: String,
    pub signature: Vec<u8>,
    pub client_data_json: String,
    pub user_handle: Option<String>,
}

/// A stored password credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredential {
    pub username: String,
    pub password: String,
}

/// The credential a platform authenticator returns on success.
///
/// The platform contract promises one of the first three shapes. `Unexpected`
/// exists so that an implementation wrapping an open-ended platform API has
/// somewhere to put a shape outside the contract; the coordinator treats it
/// as a fatal internal-contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCredential {
    Registration(RegistrationCredential),
    Assertion(AssertionCredential),
    Password(PasswordCredential),
    Unexpected { kind: String },
}
