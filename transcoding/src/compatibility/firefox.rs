use crate::api::assertion_generation_options::PublicKeyCredentialRequestOptions;
use crate::api::credential_creation_options::PublicKeyCredentialCreationOptions;
use crate::compatibility::environment::{Browser, Environment};
use crate::compatibility::CompatibilityFix;

/// Firefox 57 shipped an early draft of the API that reads `excludeList`,
/// `parameters` and `allowList` instead of the final member names.
pub struct Firefox57;

impl CompatibilityFix for Firefox57 {
    fn name(&self) -> &'static str {
        "Firefox 57"
    }

    fn applies(&self, environment: &Environment) -> bool {
        environment.is(Browser::Firefox, 57)
    }

    fn fix_registration(
        &self,
        options: PublicKeyCredentialCreationOptions,
    ) -> PublicKeyCredentialCreationOptions {
        PublicKeyCredentialCreationOptions {
            exclude_list: Some(options.exclude_credentials.to_owned()),
            parameters: Some(options.pub_key_cred_params.to_owned()),
            ..options
        }
    }

    fn fix_assertion(
        &self,
        options: PublicKeyCredentialRequestOptions,
    ) -> PublicKeyCredentialRequestOptions {
        PublicKeyCredentialRequestOptions {
            allow_list: Some(options.allow_credentials.to_owned()),
            ..options
        }
    }
}
