use serde_json::Value;

use crate::api::authenticator_responses::AuthenticatorResponse;
use crate::api::public_key_credential::PublicKeyCredential;
use crate::codec;
use crate::config::TypeHints;
use crate::json::{
    AuthenticatorAssertionResponseJSON, AuthenticatorAttestationResponseJSON,
    AuthenticatorResponseJSON, PublicKeyCredentialJSON,
};

/// Encodes every binary member of a platform result as base64url. Only the
/// members of the result's own variant appear in the output.
pub fn encode_result(credential: &PublicKeyCredential) -> PublicKeyCredentialJSON {
    let response = match &credential.response {
        AuthenticatorResponse::AuthenticatorAttestationResponse(response) => {
            AuthenticatorResponseJSON::Attestation(AuthenticatorAttestationResponseJSON {
                attestation_object: codec::encode(&response.attestation_object),
                client_data_json: codec::encode(&response.client_data_json),
            })
        }
        AuthenticatorResponse::AuthenticatorAssertionResponse(response) => {
            AuthenticatorResponseJSON::Assertion(AuthenticatorAssertionResponseJSON {
                authenticator_data: codec::encode(&response.authenticator_data),
                client_data_json: codec::encode(&response.client_data_json),
                signature: codec::encode(&response.signature),
            })
        }
    };

    PublicKeyCredentialJSON {
        id: credential.id.to_owned(),
        response,
    }
}

/// Adds `hints.field` to the credential object and to its response so a
/// polymorphic deserializer can pick the concrete types.
pub fn add_type_hints(
    credential: &PublicKeyCredentialJSON,
    hints: &TypeHints,
) -> Result<Value, serde_json::Error> {
    let response_hint = match &credential.response {
        AuthenticatorResponseJSON::Attestation(_) => &hints.attestation_response,
        AuthenticatorResponseJSON::Assertion(_) => &hints.assertion_response,
    };

    let mut hinted = serde_json::to_value(credential)?;

    if let Some(root) = hinted.as_object_mut() {
        if let Some(response) = root.get_mut("response").and_then(Value::as_object_mut) {
            response.insert(hints.field.to_owned(), Value::from(response_hint.as_str()));
        }

        root.insert(hints.field.to_owned(), Value::from(hints.credential.as_str()));
    }

    Ok(hinted)
}
