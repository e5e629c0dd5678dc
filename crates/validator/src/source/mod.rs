//! Input sources
//!
//! Adapters turning raw payloads into records of [`Value`](crate::foundation::Value)s.
//! Every adapter failure converts into a [`ParseError`] so object parsing
//! reports it like any other error.

pub(crate) mod json;

#[cfg(feature = "request")]
pub(crate) mod form;
#[cfg(feature = "request")]
pub(crate) mod multipart;
#[cfg(feature = "request")]
pub mod request;

use std::sync::Arc;

use crate::foundation::{ErrorKind, ParseError};

/// Errors raised while reading or decoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Declared or actual body length exceeds the configured limit.
    #[error("request body too large")]
    BodyTooLarge {
        /// Configured limit in bytes.
        limit: u64,
    },

    /// The body ended before its declared length.
    #[error("request body size mismatch")]
    SizeMismatch {
        /// Declared length in bytes.
        expected: u64,
        #[source]
        source: std::io::Error,
    },

    /// Reading the body failed.
    #[error("reading request body")]
    Read(#[from] std::io::Error),

    /// The payload is not valid JSON.
    #[error("unmarshalling JSON value")]
    Json(#[from] serde_json::Error),

    /// The payload decoded to something other than a JSON object.
    #[error("unmarshalling JSON value")]
    NotAnObject {
        /// Kind of the decoded top-level value.
        actual: &'static str,
    },

    /// The multipart body is malformed.
    #[error("parsing multipart form")]
    Multipart(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No adapter handles the request's content type.
    #[error("unsupported content type")]
    UnsupportedContentType {
        /// The declared media type, if any.
        content_type: Option<String>,
    },
}

impl From<SourceError> for ParseError {
    fn from(error: SourceError) -> Self {
        let message = error.to_string();
        match error {
            SourceError::BodyTooLarge { limit } => {
                Self::of_kind(ErrorKind::BodyTooLarge, message)
                    .with_param("limit", limit.to_string())
            }
            SourceError::SizeMismatch { expected, source } => {
                Self::of_kind(ErrorKind::BodySizeMismatch, message)
                    .with_param("expected", expected.to_string())
                    .with_cause(source)
            }
            SourceError::Read(source) => {
                Self::new(ErrorKind::MalformedPayload, "read_failed", message).with_cause(source)
            }
            SourceError::Json(source) => {
                Self::new(ErrorKind::MalformedPayload, "invalid_json", message).with_cause(source)
            }
            SourceError::NotAnObject { actual } => {
                Self::new(ErrorKind::MalformedPayload, "not_an_object", message)
                    .with_param("actual", actual)
            }
            SourceError::Multipart(source) => {
                Self::new(ErrorKind::MalformedPayload, "invalid_multipart", message)
                    .with_shared_cause(Arc::from(source))
            }
            SourceError::UnsupportedContentType { content_type } => {
                Self::of_kind(ErrorKind::UnsupportedContentType, message)
                    .with_param("content_type", content_type.unwrap_or_default())
            }
        }
    }
}
