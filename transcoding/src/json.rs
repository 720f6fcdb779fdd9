//! Ceremony data as the relying party sends and expects it: camelCase
//! members with binary values as base64url text.

mod creation_options;
mod descriptor;
mod public_key_credential;
mod request_options;

pub use creation_options::{
    PublicKeyCredentialCreationOptionsJSON, PublicKeyCredentialUserEntityJSON,
};
pub use descriptor::PublicKeyCredentialDescriptorJSON;
pub use public_key_credential::{
    AuthenticatorAssertionResponseJSON, AuthenticatorAttestationResponseJSON,
    AuthenticatorResponseJSON, PublicKeyCredentialJSON,
};
pub use request_options::PublicKeyCredentialRequestOptionsJSON;
