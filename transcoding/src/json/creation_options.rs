use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::credential_creation_options::{
    AuthenticatorSelectionCriteria, PublicKeyCredentialRpEntity,
};
use crate::api::credential_generation_parameters::PublicKeyCredentialParameters;
use crate::error::TranscodeError;
use crate::json::PublicKeyCredentialDescriptorJSON;

/// Registration options as issued by the relying party.
///
/// Members whose absence is an error (`challenge`, `user.id`) are optional
/// here so that the request transcoder can name them when they are missing.
/// `timeout` and `attestation` are read but always overridden.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptionsJSON {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp: Option<PublicKeyCredentialRpEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicKeyCredentialUserEntityJSON>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default)]
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptorJSON>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl PublicKeyCredentialCreationOptionsJSON {
    pub fn from_value(value: Value) -> Result<PublicKeyCredentialCreationOptionsJSON, TranscodeError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<PublicKeyCredentialCreationOptionsJSON, TranscodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntityJSON {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
