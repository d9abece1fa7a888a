use serde::Serialize;

/// Payload posted to the relying-party server after the authenticator
/// resolves a ceremony. Binary fields are base64url-encoded on the wire.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VerificationPayload {
    Registration {
        credential_id: String,
        attestation_object: String,
        client_data_json: String,
    },
    Assertion {
        credential_id: String,
        signature: String,
        client_data_json: String,
    },
    Password {
        username: String,
        password: String,
    },
}
