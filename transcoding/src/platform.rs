//! The platform credential API as seen from a ceremony.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::public_key_credential::{
    CredentialCreationOptions, CredentialRequestOptions, PublicKeyCredential,
};

mod channel;

pub use channel::{ChannelPlatform, PlatformRequest};

/// Credential creation and retrieval. Each call settles exactly once; the
/// options' `timeout` is the only way a pending call ends without an answer.
#[async_trait]
pub trait Platform: Send + Sync {
    async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<PublicKeyCredential, PlatformError>;

    async fn get(
        &self,
        options: CredentialRequestOptions,
    ) -> Result<PublicKeyCredential, PlatformError>;
}

#[async_trait]
impl<P: Platform + ?Sized> Platform for std::sync::Arc<P> {
    async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        (**self).create(options).await
    }

    async fn get(
        &self,
        options: CredentialRequestOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        (**self).get(options).await
    }
}

/// Rejections from the platform, named after the exceptions the credential
/// API raises.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PlatformError {
    /// Cancelled by the user, timed out, or refused by policy.
    #[error("NotAllowedError: {0}")]
    NotAllowed(String),
    #[error("NotSupportedError: {0}")]
    NotSupported(String),
    /// An excluded credential is already present on the authenticator.
    #[error("InvalidStateError: {0}")]
    InvalidState(String),
    #[error("SecurityError: {0}")]
    Security(String),
    #[error("ConstraintError: {0}")]
    Constraint(String),
    #[error("AbortError: {0}")]
    Abort(String),
    #[error("UnknownError: {0}")]
    Unknown(String),
}
