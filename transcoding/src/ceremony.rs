//! One registration or authentication, start to finish.
//!
//! Every ceremony runs `Decoding -> PlatformCall -> Encoding` and stops at the
//! first failure. Decoding errors surface before the platform is touched;
//! platform rejections are returned as the platform produced them. Nothing
//! is retried: a failed ceremony needs a fresh challenge from the relying
//! party.

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::public_key_credential::{CredentialCreationOptions, CredentialRequestOptions};
use crate::compatibility::CompatibilityLayer;
use crate::config::CeremonyConfig;
use crate::json::{
    PublicKeyCredentialCreationOptionsJSON, PublicKeyCredentialJSON,
    PublicKeyCredentialRequestOptionsJSON,
};
use crate::platform::Platform;
use crate::transcode::response::{add_type_hints, encode_result};
use crate::transcode::RequestTranscoder;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CeremonyStage {
    Decoding,
    PlatformCall,
    Encoding,
}

impl std::fmt::Display for CeremonyStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CeremonyStage::Decoding => write!(f, "decoding"),
            CeremonyStage::PlatformCall => write!(f, "platform call"),
            CeremonyStage::Encoding => write!(f, "encoding"),
        }
    }
}

pub struct Ceremony<P> {
    platform: P,
    transcoder: RequestTranscoder,
    config: CeremonyConfig,
}

impl<P: Platform> Ceremony<P> {
    pub fn new(platform: P, config: CeremonyConfig) -> Ceremony<P> {
        Ceremony {
            platform,
            transcoder: RequestTranscoder::default(),
            config,
        }
    }

    pub fn with_compatibility(self, compatibility: CompatibilityLayer) -> Ceremony<P> {
        Ceremony {
            transcoder: RequestTranscoder::new(compatibility),
            ..self
        }
    }

    pub fn config(&self) -> &CeremonyConfig {
        &self.config
    }

    /// Creates a credential from registration options JSON and returns the
    /// encoded result, with type hints when configured.
    pub async fn register(&self, request: Value) -> crate::Result<Value> {
        let request = PublicKeyCredentialCreationOptionsJSON::from_value(request)?;
        let credential = self.register_credential(&request).await?;

        self.to_json(&credential)
    }

    /// Gets an assertion from assertion options JSON and returns the encoded
    /// result, with type hints when configured.
    pub async fn authenticate(&self, request: Value) -> crate::Result<Value> {
        let request = PublicKeyCredentialRequestOptionsJSON::from_value(request)?;
        let credential = self.authenticate_credential(&request).await?;

        self.to_json(&credential)
    }

    pub async fn register_credential(
        &self,
        request: &PublicKeyCredentialCreationOptionsJSON,
    ) -> crate::Result<PublicKeyCredentialJSON> {
        debug!(stage = %CeremonyStage::Decoding, "registration");

        let public_key = self
            .transcoder
            .decode_registration(request, &self.config.environment)?;

        debug!(stage = %CeremonyStage::PlatformCall, timeout = public_key.timeout, "registration");

        let credential = self
            .platform
            .create(CredentialCreationOptions { public_key })
            .await
            .map_err(|error| {
                warn!(stage = %CeremonyStage::PlatformCall, %error, "registration rejected");

                error
            })?;

        if !credential.response.is_attestation() {
            warn!(id = %credential.id, "registration answered with an assertion");
        }

        debug!(stage = %CeremonyStage::Encoding, id = %credential.id, "registration");

        Ok(encode_result(&credential))
    }

    pub async fn authenticate_credential(
        &self,
        request: &PublicKeyCredentialRequestOptionsJSON,
    ) -> crate::Result<PublicKeyCredentialJSON> {
        debug!(stage = %CeremonyStage::Decoding, "authentication");

        let public_key = self
            .transcoder
            .decode_assertion(request, &self.config.environment)?;

        debug!(stage = %CeremonyStage::PlatformCall, timeout = public_key.timeout, "authentication");

        let credential = self
            .platform
            .get(CredentialRequestOptions { public_key })
            .await
            .map_err(|error| {
                warn!(stage = %CeremonyStage::PlatformCall, %error, "authentication rejected");

                error
            })?;

        if credential.response.is_attestation() {
            warn!(id = %credential.id, "authentication answered with an attestation");
        }

        debug!(stage = %CeremonyStage::Encoding, id = %credential.id, "authentication");

        Ok(encode_result(&credential))
    }

    fn to_json(&self, credential: &PublicKeyCredentialJSON) -> crate::Result<Value> {
        match &self.config.type_hints {
            Some(hints) => Ok(add_type_hints(credential, hints)?),
            None => Ok(serde_json::to_value(credential)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::authenticator_responses::{
        AuthenticatorAssertionResponse, AuthenticatorAttestationResponse, AuthenticatorResponse,
    };
    use crate::api::credential_creation_options::AttestationConveyancePreference;
    use crate::api::public_key_credential::PublicKeyCredential;
    use crate::compatibility::Environment;
    use crate::config::TypeHints;
    use crate::error::{Error, TranscodeError};
    use crate::platform::{ChannelPlatform, PlatformError, PlatformRequest};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct RecordingPlatform {
        result: std::result::Result<PublicKeyCredential, PlatformError>,
        created: Mutex<Vec<CredentialCreationOptions>>,
        requested: Mutex<Vec<CredentialRequestOptions>>,
    }

    impl RecordingPlatform {
        fn answering(
            result: std::result::Result<PublicKeyCredential, PlatformError>,
        ) -> Arc<RecordingPlatform> {
            Arc::new(RecordingPlatform {
                result,
                created: Mutex::new(Vec::new()),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.created.lock().unwrap().len() + self.requested.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Platform for RecordingPlatform {
        async fn create(
            &self,
            options: CredentialCreationOptions,
        ) -> std::result::Result<PublicKeyCredential, PlatformError> {
            self.created.lock().unwrap().push(options);
            self.result.to_owned()
        }

        async fn get(
            &self,
            options: CredentialRequestOptions,
        ) -> std::result::Result<PublicKeyCredential, PlatformError> {
            self.requested.lock().unwrap().push(options);
            self.result.to_owned()
        }
    }

    fn test_attestation() -> PublicKeyCredential {
        PublicKeyCredential::new(
            "some_credential_id",
            AuthenticatorResponse::AuthenticatorAttestationResponse(
                AuthenticatorAttestationResponse {
                    attestation_object: [0, 1, 2].to_vec(),
                    client_data_json: b"{}".to_vec(),
                },
            ),
        )
    }

    fn test_assertion() -> PublicKeyCredential {
        PublicKeyCredential::new(
            "some_key_id",
            AuthenticatorResponse::AuthenticatorAssertionResponse(
                AuthenticatorAssertionResponse {
                    authenticator_data: [1, 2, 3].to_vec(),
                    client_data_json: b"{}".to_vec(),
                    signature: [0xfb, 0xff].to_vec(),
                },
            ),
        )
    }

    fn test_registration_request() -> Value {
        json!({
            "challenge": "AAEC",
            "excludeCredentials": [{"type": "public-key", "id": "AQ"}],
            "user": {"id": "AQID", "name": "a"},
            "pubKeyCredParams": [{"type": "public-key", "alg": -7}],
            "attestation": "none",
            "timeout": 999
        })
    }

    fn test_assertion_request() -> Value {
        json!({
            "challenge": "AAEC",
            "allowCredentials": [{"type": "public-key", "id": "AQID"}],
            "timeout": 300000
        })
    }

    #[tokio::test]
    async fn register() -> Result<(), Box<dyn std::error::Error>> {
        let test_platform = RecordingPlatform::answering(Ok(test_attestation()));
        let test_ceremony = Ceremony::new(test_platform.to_owned(), CeremonyConfig::default());

        let test_result = test_ceremony.register(test_registration_request()).await?;

        assert_eq!(
            test_result,
            json!({
                "id": "some_credential_id",
                "response": {"attestationObject": "AAEC", "clientDataJSON": "e30"}
            }),
        );

        let test_created = test_platform.created.lock().unwrap();

        assert_eq!(test_created.len(), 1);
        assert_eq!(test_created[0].public_key.challenge, [0, 1, 2]);
        assert_eq!(test_created[0].public_key.user.id, [1, 2, 3]);
        assert_eq!(test_created[0].public_key.exclude_credentials[0].id, [1]);
        assert_eq!(test_created[0].public_key.timeout, 10000);
        assert_eq!(
            test_created[0].public_key.attestation,
            AttestationConveyancePreference::Direct,
        );
        assert!(test_created[0].public_key.exclude_list.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_with_type_hints() -> Result<(), Box<dyn std::error::Error>> {
        let test_platform = RecordingPlatform::answering(Ok(test_assertion()));
        let test_config = CeremonyConfig::default().with_type_hints(TypeHints::jackson());
        let test_ceremony = Ceremony::new(test_platform.to_owned(), test_config);

        let test_result = test_ceremony.authenticate(test_assertion_request()).await?;

        assert_eq!(
            test_result,
            json!({
                "@jackson_type": "com.yubico.webauthn.data.impl.PublicKeyCredential",
                "id": "some_key_id",
                "response": {
                    "@jackson_type": "com.yubico.webauthn.data.impl.AuthenticatorAssertionResponse",
                    "authenticatorData": "AQID",
                    "clientDataJSON": "e30",
                    "signature": "-_8"
                }
            }),
        );

        let test_requested = test_platform.requested.lock().unwrap();

        assert_eq!(test_requested.len(), 1);
        assert_eq!(test_requested[0].public_key.challenge, [0, 1, 2]);
        assert_eq!(test_requested[0].public_key.allow_credentials[0].id, [1, 2, 3]);
        assert_eq!(test_requested[0].public_key.timeout, 10000);

        Ok(())
    }

    #[tokio::test]
    async fn firefox_57_environment() -> Result<(), Box<dyn std::error::Error>> {
        let test_platform = RecordingPlatform::answering(Ok(test_assertion()));
        let test_config = CeremonyConfig::default().with_environment(Environment::new(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.13; rv:57.0) Gecko/20100101 Firefox/57.0",
        ));
        let test_ceremony = Ceremony::new(test_platform.to_owned(), test_config);

        test_ceremony.authenticate(test_assertion_request()).await?;

        let test_requested = test_platform.requested.lock().unwrap();

        assert_eq!(
            test_requested[0].public_key.allow_list.as_ref(),
            Some(&test_requested[0].public_key.allow_credentials),
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_request_never_reaches_platform() -> Result<(), Box<dyn std::error::Error>> {
        let test_platform = RecordingPlatform::answering(Ok(test_attestation()));
        let test_ceremony = Ceremony::new(test_platform.to_owned(), CeremonyConfig::default());

        let mut test_request = test_registration_request();
        test_request["challenge"] = json!("AA/C");

        let test_error = test_ceremony.register(test_request).await;

        assert!(matches!(
            test_error,
            Err(Error::Transcode(TranscodeError::InvalidOptions { .. })),
        ));

        let test_error = test_ceremony.authenticate(json!({"allowCredentials": []})).await;

        assert!(matches!(
            test_error,
            Err(Error::Transcode(TranscodeError::InvalidOptions { .. })),
        ));

        let test_error = test_ceremony.authenticate(json!("not options")).await;

        assert!(matches!(test_error, Err(Error::Transcode(TranscodeError::Json(_)))));
        assert_eq!(test_platform.calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn platform_rejection_is_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let test_rejection = PlatformError::InvalidState(String::from("credential excluded"));
        let test_platform = RecordingPlatform::answering(Err(test_rejection.to_owned()));
        let test_ceremony = Ceremony::new(test_platform.to_owned(), CeremonyConfig::default());

        match test_ceremony.register(test_registration_request()).await {
            Err(Error::Platform(error)) => assert_eq!(error, test_rejection),
            other => panic!("expected a platform error, got {:?}", other),
        }

        match test_ceremony.authenticate(test_assertion_request()).await {
            Err(Error::Platform(error)) => assert_eq!(error, test_rejection),
            other => panic!("expected a platform error, got {:?}", other),
        }

        assert_eq!(test_platform.calls(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn typed_ceremony() -> Result<(), Box<dyn std::error::Error>> {
        let test_platform = RecordingPlatform::answering(Ok(test_attestation()));
        let test_ceremony = Ceremony::new(test_platform, CeremonyConfig::default())
            .with_compatibility(CompatibilityLayer::new(&[]));
        let test_request =
            PublicKeyCredentialCreationOptionsJSON::from_value(test_registration_request())?;

        let test_credential = test_ceremony.register_credential(&test_request).await?;

        assert_eq!(test_credential, encode_result(&test_attestation()));
        assert!(test_ceremony.config().type_hints.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn over_channel_platform() -> Result<(), Box<dyn std::error::Error>> {
        let (mut test_requests, test_platform) = ChannelPlatform::init().await;
        let test_ceremony = Ceremony::new(test_platform, CeremonyConfig::default());

        tokio::spawn(async move {
            while let Some(request) = test_requests.recv().await {
                let credential = match &request {
                    PlatformRequest::Create { .. } => test_attestation(),
                    PlatformRequest::Get { .. } => test_assertion(),
                };

                request.respond(Ok(credential));
            }
        });

        let test_registration = test_ceremony.register(test_registration_request()).await?;
        let test_authentication = test_ceremony.authenticate(test_assertion_request()).await?;

        assert_eq!(test_registration["response"]["attestationObject"], "AAEC");
        assert_eq!(test_authentication["response"]["signature"], "-_8");

        Ok(())
    }
}
