use serde::{Deserialize, Serialize};

use crate::api::credential_creation_options::AttestationConveyancePreference;
use crate::compatibility::Environment;

/// Every ceremony handed to the platform waits this long, whatever the
/// relying party asked for.
pub const CEREMONY_TIMEOUT: u64 = 10000;

/// Registration always asks for direct attestation.
pub const ATTESTATION_POLICY: AttestationConveyancePreference =
    AttestationConveyancePreference::Direct;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyConfig {
    #[serde(default)]
    pub environment: Environment,
    /// Attach discriminators to encoded results when the relying party's
    /// deserializer needs them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hints: Option<TypeHints>,
}

impl CeremonyConfig {
    pub fn from_json(json: &str) -> Result<CeremonyConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_environment(self, environment: Environment) -> CeremonyConfig {
        CeremonyConfig {
            environment,
            ..self
        }
    }

    pub fn with_type_hints(self, type_hints: TypeHints) -> CeremonyConfig {
        CeremonyConfig {
            type_hints: Some(type_hints),
            ..self
        }
    }
}

/// Names of the discriminator member and of the concrete types it selects.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeHints {
    pub field: String,
    pub credential: String,
    pub attestation_response: String,
    pub assertion_response: String,
}

impl TypeHints {
    /// The hints a Jackson based relying party built on the Yubico WebAuthn
    /// server library polymorphically deserializes.
    pub fn jackson() -> TypeHints {
        TypeHints {
            field: String::from("@jackson_type"),
            credential: String::from("com.yubico.webauthn.data.impl.PublicKeyCredential"),
            attestation_response: String::from(
                "com.yubico.webauthn.data.impl.AuthenticatorAttestationResponse",
            ),
            assertion_response: String::from(
                "com.yubico.webauthn.data.impl.AuthenticatorAssertionResponse",
            ),
        }
    }
}

impl Default for TypeHints {
    fn default() -> TypeHints {
        TypeHints {
            field: String::from("@type"),
            credential: String::from("PublicKeyCredential"),
            attestation_response: String::from("AuthenticatorAttestationResponse"),
            assertion_response: String::from("AuthenticatorAssertionResponse"),
        }
    }
}
