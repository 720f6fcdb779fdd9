use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::supporting_data_structures::UserVerificationRequirement;
use crate::error::TranscodeError;
use crate::json::PublicKeyCredentialDescriptorJSON;

/// Assertion options as issued by the relying party.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptionsJSON {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptorJSON>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl PublicKeyCredentialRequestOptionsJSON {
    pub fn from_value(value: Value) -> Result<PublicKeyCredentialRequestOptionsJSON, TranscodeError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<PublicKeyCredentialRequestOptionsJSON, TranscodeError> {
        Ok(serde_json::from_str(json)?)
    }
}
