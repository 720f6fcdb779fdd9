use tracing::debug;

use crate::api::assertion_generation_options::PublicKeyCredentialRequestOptions;
use crate::api::credential_creation_options::{
    PublicKeyCredentialCreationOptions, PublicKeyCredentialUserEntity,
};
use crate::api::supporting_data_structures::PublicKeyCredentialDescriptor;
use crate::codec;
use crate::compatibility::{CompatibilityLayer, Environment};
use crate::config::{ATTESTATION_POLICY, CEREMONY_TIMEOUT};
use crate::error::TranscodeError;
use crate::json::{
    PublicKeyCredentialCreationOptionsJSON, PublicKeyCredentialDescriptorJSON,
    PublicKeyCredentialRequestOptionsJSON,
};

/// Turns relying party options into platform options.
///
/// Binary members are decoded, the ceremony policy (timeout, attestation) is
/// imposed, and the compatibility fixes for `environment` are applied last.
/// The input is never modified.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestTranscoder {
    compatibility: CompatibilityLayer,
}

impl RequestTranscoder {
    pub fn new(compatibility: CompatibilityLayer) -> RequestTranscoder {
        RequestTranscoder { compatibility }
    }

    pub fn decode_registration(
        &self,
        json: &PublicKeyCredentialCreationOptionsJSON,
        environment: &Environment,
    ) -> Result<PublicKeyCredentialCreationOptions, TranscodeError> {
        let challenge = decode_binary("challenge", json.challenge.as_deref())?;
        let user = json
            .user
            .as_ref()
            .ok_or_else(|| TranscodeError::missing("user"))?;
        let user = PublicKeyCredentialUserEntity {
            id: decode_binary("user.id", user.id.as_deref())?,
            name: user.name.to_owned(),
            display_name: user.display_name.to_owned(),
            other: user.other.to_owned(),
        };
        let exclude_credentials =
            decode_descriptors("excludeCredentials", json.exclude_credentials.as_deref())?;

        debug!(
            excluded = exclude_credentials.len(),
            requested_timeout = json.timeout,
            requested_attestation = json.attestation.as_deref(),
            "decoded registration options"
        );

        let options = PublicKeyCredentialCreationOptions {
            rp: json.rp.to_owned(),
            user,
            challenge,
            pub_key_cred_params: json.pub_key_cred_params.to_owned(),
            timeout: CEREMONY_TIMEOUT,
            exclude_credentials,
            authenticator_selection: json.authenticator_selection.to_owned(),
            attestation: ATTESTATION_POLICY,
            extensions: json.extensions.to_owned(),
            exclude_list: None,
            parameters: None,
            other: json.other.to_owned(),
        };

        Ok(self
            .compatibility
            .apply_registration_fixes(&options, environment))
    }

    pub fn decode_assertion(
        &self,
        json: &PublicKeyCredentialRequestOptionsJSON,
        environment: &Environment,
    ) -> Result<PublicKeyCredentialRequestOptions, TranscodeError> {
        let challenge = decode_binary("challenge", json.challenge.as_deref())?;
        let allow_credentials =
            decode_descriptors("allowCredentials", json.allow_credentials.as_deref())?;

        debug!(
            allowed = allow_credentials.len(),
            requested_timeout = json.timeout,
            "decoded assertion options"
        );

        let options = PublicKeyCredentialRequestOptions {
            challenge,
            timeout: CEREMONY_TIMEOUT,
            rp_id: json.rp_id.to_owned(),
            allow_credentials,
            user_verification: json.user_verification.to_owned(),
            extensions: json.extensions.to_owned(),
            allow_list: None,
            other: json.other.to_owned(),
        };

        Ok(self.compatibility.apply_assertion_fixes(&options, environment))
    }
}

pub fn decode_registration(
    json: &PublicKeyCredentialCreationOptionsJSON,
    environment: &Environment,
) -> Result<PublicKeyCredentialCreationOptions, TranscodeError> {
    RequestTranscoder::default().decode_registration(json, environment)
}

pub fn decode_assertion(
    json: &PublicKeyCredentialRequestOptionsJSON,
    environment: &Environment,
) -> Result<PublicKeyCredentialRequestOptions, TranscodeError> {
    RequestTranscoder::default().decode_assertion(json, environment)
}

fn decode_binary(field: &str, text: Option<&str>) -> Result<Vec<u8>, TranscodeError> {
    let text = text.ok_or_else(|| TranscodeError::missing(field))?;
    let data = codec::decode(text).map_err(|error| TranscodeError::malformed(field, error))?;

    match data.is_empty() {
        true => Err(TranscodeError::empty(field)),
        false => Ok(data),
    }
}

fn decode_descriptors(
    field: &str,
    descriptors: Option<&[PublicKeyCredentialDescriptorJSON]>,
) -> Result<Vec<PublicKeyCredentialDescriptor>, TranscodeError> {
    descriptors
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, descriptor)| -> Result<PublicKeyCredentialDescriptor, TranscodeError> {
            Ok(PublicKeyCredentialDescriptor {
                r#type: descriptor.r#type.to_owned(),
                id: decode_binary(&format!("{field}[{index}].id"), descriptor.id.as_deref())?,
                transports: descriptor.transports.to_owned(),
                other: descriptor.other.to_owned(),
            })
        })
        .collect()
}
