use serde::{Deserialize, Serialize};

/// The authenticator's answer, tagged once when the platform result arrives.
///
/// Deserializing an untagged platform object picks the attestation variant
/// exactly when `attestationObject` is present.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuthenticatorResponse {
    AuthenticatorAttestationResponse(AuthenticatorAttestationResponse),
    AuthenticatorAssertionResponse(AuthenticatorAssertionResponse),
}

impl AuthenticatorResponse {
    pub fn is_attestation(&self) -> bool {
        matches!(self, AuthenticatorResponse::AuthenticatorAttestationResponse(_))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthenticatorAttestationResponse {
    #[serde(rename = "attestationObject")]
    pub attestation_object: Vec<u8>,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthenticatorAssertionResponse {
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: Vec<u8>,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
}
