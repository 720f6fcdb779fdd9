//! Ceremony data in the shape the platform credential API consumes and
//! produces. Binary members are raw bytes here.

pub mod assertion_generation_options;
pub mod authenticator_responses;
pub mod credential_creation_options;
pub mod credential_generation_parameters;
pub mod public_key_credential;
pub mod supporting_data_structures;
