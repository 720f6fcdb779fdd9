use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::warn;

use std::time::Duration;

use crate::api::public_key_credential::{
    CredentialCreationOptions, CredentialRequestOptions, PublicKeyCredential,
};
use crate::platform::{Platform, PlatformError};

type Responder = oneshot::Sender<Result<PublicKeyCredential, PlatformError>>;

const REQUEST_BUFFER: usize = 64;

/// A platform call waiting for an authenticator to answer it.
#[derive(Debug)]
pub enum PlatformRequest {
    Create {
        options: CredentialCreationOptions,
        responder: Responder,
    },
    Get {
        options: CredentialRequestOptions,
        responder: Responder,
    },
}

impl PlatformRequest {
    /// Settles the pending call. Answers arriving after the call timed out
    /// are dropped.
    pub fn respond(self, result: Result<PublicKeyCredential, PlatformError>) {
        let responder = match self {
            PlatformRequest::Create { responder, .. } => responder,
            PlatformRequest::Get { responder, .. } => responder,
        };

        if responder.send(result).is_err() {
            warn!("platform request answered after the caller stopped waiting");
        }
    }
}

/// A [`Platform`] served by whatever task owns the request receiver, such as
/// a bridge to a browser or a software authenticator.
#[derive(Clone, Debug)]
pub struct ChannelPlatform {
    authenticator: mpsc::Sender<PlatformRequest>,
}

impl ChannelPlatform {
    pub async fn init() -> (mpsc::Receiver<PlatformRequest>, ChannelPlatform) {
        let (authenticator, requests) = mpsc::channel(REQUEST_BUFFER);

        (requests, ChannelPlatform { authenticator })
    }

    async fn call(
        &self,
        request: PlatformRequest,
        response: oneshot::Receiver<Result<PublicKeyCredential, PlatformError>>,
        call_timeout: Duration,
    ) -> Result<PublicKeyCredential, PlatformError> {
        let exchange = async {
            if self.authenticator.send(request).await.is_err() {
                return Err(PlatformError::NotSupported(String::from(
                    "no authenticator is listening",
                )));
            }

            match response.await {
                Ok(result) => result,
                Err(_) => Err(PlatformError::Abort(String::from(
                    "the authenticator dropped the request",
                ))),
            }
        };

        match timeout(call_timeout, exchange).await {
            Ok(result) => result,
            Err(elapsed) => {
                warn!(timeout = ?call_timeout, "channel platform | {:?}", elapsed);

                Err(PlatformError::NotAllowed(format!(
                    "timed out after {} ms",
                    call_timeout.as_millis(),
                )))
            }
        }
    }
}

#[async_trait]
impl Platform for ChannelPlatform {
    async fn create(
        &self,
        options: CredentialCreationOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        let call_timeout = Duration::from_millis(options.public_key.timeout);
        let (responder, response) = oneshot::channel();
        let request = PlatformRequest::Create { options, responder };

        self.call(request, response, call_timeout).await
    }

    async fn get(
        &self,
        options: CredentialRequestOptions,
    ) -> Result<PublicKeyCredential, PlatformError> {
        let call_timeout = Duration::from_millis(options.public_key.timeout);
        let (responder, response) = oneshot::channel();
        let request = PlatformRequest::Get { options, responder };

        self.call(request, response, call_timeout).await
    }
}
