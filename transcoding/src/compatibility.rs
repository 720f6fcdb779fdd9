//! Rewrites for browsers whose credential API diverges from the standard
//! member names or shapes.
//!
//! Fixes run in declaration order over the output of the previous fix. Each
//! one decides from an explicit browser version check whether it applies;
//! the environment is consulted on every call and never cached.

use tracing::debug;

use crate::api::assertion_generation_options::PublicKeyCredentialRequestOptions;
use crate::api::credential_creation_options::PublicKeyCredentialCreationOptions;

pub mod environment;
mod firefox;

pub use environment::{Browser, BrowserVersion, Environment};
pub use firefox::Firefox57;

/// One environment specific rewrite. Fixes may add or rename members, never
/// remove them.
pub trait CompatibilityFix: Send + Sync {
    fn name(&self) -> &'static str;

    fn applies(&self, environment: &Environment) -> bool;

    fn fix_registration(
        &self,
        options: PublicKeyCredentialCreationOptions,
    ) -> PublicKeyCredentialCreationOptions {
        options
    }

    fn fix_assertion(
        &self,
        options: PublicKeyCredentialRequestOptions,
    ) -> PublicKeyCredentialRequestOptions {
        options
    }
}

/// Every known fix, in the order it is applied.
pub static COMPATIBILITY_FIXES: &[&dyn CompatibilityFix] = &[&Firefox57];

#[derive(Clone, Copy)]
pub struct CompatibilityLayer {
    fixes: &'static [&'static dyn CompatibilityFix],
}

impl CompatibilityLayer {
    pub const fn new(fixes: &'static [&'static dyn CompatibilityFix]) -> CompatibilityLayer {
        CompatibilityLayer { fixes }
    }

    pub fn fixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fixes.iter().map(|fix| fix.name())
    }

    /// Returns a new value; `options` is left as the relying party issued it.
    pub fn apply_registration_fixes(
        &self,
        options: &PublicKeyCredentialCreationOptions,
        environment: &Environment,
    ) -> PublicKeyCredentialCreationOptions {
        self.fixes
            .iter()
            .fold(options.to_owned(), |options, fix| match fix.applies(environment) {
                true => {
                    debug!(fix = fix.name(), "applying registration compatibility fix");

                    fix.fix_registration(options)
                }
                false => options,
            })
    }

    /// Returns a new value; `options` is left as the relying party issued it.
    pub fn apply_assertion_fixes(
        &self,
        options: &PublicKeyCredentialRequestOptions,
        environment: &Environment,
    ) -> PublicKeyCredentialRequestOptions {
        self.fixes
            .iter()
            .fold(options.to_owned(), |options, fix| match fix.applies(environment) {
                true => {
                    debug!(fix = fix.name(), "applying assertion compatibility fix");

                    fix.fix_assertion(options)
                }
                false => options,
            })
    }
}

impl Default for CompatibilityLayer {
    fn default() -> CompatibilityLayer {
        CompatibilityLayer::new(COMPATIBILITY_FIXES)
    }
}

impl std::fmt::Debug for CompatibilityLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.fixes()).finish()
    }
}

pub fn apply_registration_fixes(
    options: &PublicKeyCredentialCreationOptions,
    environment: &Environment,
) -> PublicKeyCredentialCreationOptions {
    CompatibilityLayer::default().apply_registration_fixes(options, environment)
}

pub fn apply_assertion_fixes(
    options: &PublicKeyCredentialRequestOptions,
    environment: &Environment,
) -> PublicKeyCredentialRequestOptions {
    CompatibilityLayer::default().apply_assertion_fixes(options, environment)
}
