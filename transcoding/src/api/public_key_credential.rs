use serde::{Deserialize, Serialize};

use crate::api::assertion_generation_options::PublicKeyCredentialRequestOptions;
use crate::api::authenticator_responses::AuthenticatorResponse;
use crate::api::credential_creation_options::PublicKeyCredentialCreationOptions;

/// The platform's result for a create or get call.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredential {
    pub id: String,
    pub response: AuthenticatorResponse,
}

impl PublicKeyCredential {
    pub fn new(id: impl Into<String>, response: AuthenticatorResponse) -> PublicKeyCredential {
        PublicKeyCredential {
            id: id.into(),
            response,
        }
    }
}

/// Argument of the platform's credential creation call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCreationOptions {
    pub public_key: PublicKeyCredentialCreationOptions,
}

/// Argument of the platform's assertion call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequestOptions {
    pub public_key: PublicKeyCredentialRequestOptions,
}
