use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::supporting_data_structures::PublicKeyCredentialType;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicKeyCredentialDescriptorJSON {
    pub r#type: PublicKeyCredentialType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
