use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum PublicKeyCredentialType {
    PublicKey,
    /// A credential type newer than this crate, passed through as sent.
    Unknown(String),
}

impl From<String> for PublicKeyCredentialType {
    fn from(value: String) -> PublicKeyCredentialType {
        match value.as_str() {
            "public-key" => PublicKeyCredentialType::PublicKey,
            _ => PublicKeyCredentialType::Unknown(value),
        }
    }
}

impl From<PublicKeyCredentialType> for String {
    fn from(value: PublicKeyCredentialType) -> String {
        match value {
            PublicKeyCredentialType::PublicKey => String::from("public-key"),
            PublicKeyCredentialType::Unknown(value) => value,
        }
    }
}

/// A reference to an existing credential by its opaque id.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialDescriptor {
    pub r#type: PublicKeyCredentialType,
    pub id: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

pub type COSEAlgorithmIdentifier = i64;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum UserVerificationRequirement {
    Required,
    Preferred,
    Discouraged,
    Unknown(String),
}

impl From<String> for UserVerificationRequirement {
    fn from(value: String) -> UserVerificationRequirement {
        match value.as_str() {
            "required" => UserVerificationRequirement::Required,
            "preferred" => UserVerificationRequirement::Preferred,
            "discouraged" => UserVerificationRequirement::Discouraged,
            _ => UserVerificationRequirement::Unknown(value),
        }
    }
}

impl From<UserVerificationRequirement> for String {
    fn from(value: UserVerificationRequirement) -> String {
        match value {
            UserVerificationRequirement::Required => String::from("required"),
            UserVerificationRequirement::Preferred => String::from("preferred"),
            UserVerificationRequirement::Discouraged => String::from("discouraged"),
            UserVerificationRequirement::Unknown(value) => value,
        }
    }
}
