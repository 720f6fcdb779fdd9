use thiserror::Error;

use crate::codec::MalformedEncodingError;
use crate::platform::PlatformError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while turning relying party JSON into platform options.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// A required member is missing, empty, or not valid base64url.
    #[error("invalid options: `{field}` {reason}")]
    InvalidOptions { field: String, reason: String },

    /// The request is not shaped like ceremony options at all.
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranscodeError {
    pub(crate) fn missing(field: impl Into<String>) -> TranscodeError {
        TranscodeError::InvalidOptions {
            field: field.into(),
            reason: String::from("is missing"),
        }
    }

    pub(crate) fn empty(field: impl Into<String>) -> TranscodeError {
        TranscodeError::InvalidOptions {
            field: field.into(),
            reason: String::from("is empty"),
        }
    }

    pub(crate) fn malformed(field: impl Into<String>, error: MalformedEncodingError) -> TranscodeError {
        TranscodeError::InvalidOptions {
            field: field.into(),
            reason: error.to_string(),
        }
    }
}

/// Everything a ceremony can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    /// The platform rejected the call. Passed through untouched.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("json serialization error -> {0}")]
    Json(#[from] serde_json::Error),
}
