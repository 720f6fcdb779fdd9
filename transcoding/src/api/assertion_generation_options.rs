use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::supporting_data_structures::{
    PublicKeyCredentialDescriptor, UserVerificationRequirement,
};

/// Assertion options ready for the platform. Produced only by
/// [`crate::transcode::request::decode_assertion`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptions {
    pub challenge: Vec<u8>,
    pub timeout: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,
    pub allow_credentials: Vec<PublicKeyCredentialDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    /// Legacy name for `allow_credentials`, filled by compatibility fixes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_list: Option<Vec<PublicKeyCredentialDescriptor>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
