use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::credential_generation_parameters::PublicKeyCredentialParameters;
use crate::api::supporting_data_structures::{
    PublicKeyCredentialDescriptor, UserVerificationRequirement,
};

/// Registration options ready for the platform. Produced only by
/// [`crate::transcode::request::decode_registration`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp: Option<PublicKeyCredentialRpEntity>,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: Vec<u8>,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    pub timeout: u64,
    pub exclude_credentials: Vec<PublicKeyCredentialDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub attestation: AttestationConveyancePreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    /// Legacy name for `exclude_credentials`, filled by compatibility fixes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_list: Option<Vec<PublicKeyCredentialDescriptor>>,
    /// Legacy name for `pub_key_cred_params`, filled by compatibility fixes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<PublicKeyCredentialParameters>>,
    /// Members this crate does not model, passed through untouched.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialRpEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntity {
    pub id: Vec<u8>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelectionCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<AuthenticatorAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<ResidentKeyRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AuthenticatorAttachment {
    Platform,
    CrossPlatform,
    Unknown(String),
}

impl From<String> for AuthenticatorAttachment {
    fn from(value: String) -> AuthenticatorAttachment {
        match value.as_str() {
            "platform" => AuthenticatorAttachment::Platform,
            "cross-platform" => AuthenticatorAttachment::CrossPlatform,
            _ => AuthenticatorAttachment::Unknown(value),
        }
    }
}

impl From<AuthenticatorAttachment> for String {
    fn from(value: AuthenticatorAttachment) -> String {
        match value {
            AuthenticatorAttachment::Platform => String::from("platform"),
            AuthenticatorAttachment::CrossPlatform => String::from("cross-platform"),
            AuthenticatorAttachment::Unknown(value) => value,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ResidentKeyRequirement {
    Discouraged,
    Preferred,
    Required,
    Unknown(String),
}

impl From<String> for ResidentKeyRequirement {
    fn from(value: String) -> ResidentKeyRequirement {
        match value.as_str() {
            "discouraged" => ResidentKeyRequirement::Discouraged,
            "preferred" => ResidentKeyRequirement::Preferred,
            "required" => ResidentKeyRequirement::Required,
            _ => ResidentKeyRequirement::Unknown(value),
        }
    }
}

impl From<ResidentKeyRequirement> for String {
    fn from(value: ResidentKeyRequirement) -> String {
        match value {
            ResidentKeyRequirement::Discouraged => String::from("discouraged"),
            ResidentKeyRequirement::Preferred => String::from("preferred"),
            ResidentKeyRequirement::Required => String::from("required"),
            ResidentKeyRequirement::Unknown(value) => value,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AttestationConveyancePreference {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "indirect")]
    Indirect,
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "enterprise")]
    Enterprise,
}
