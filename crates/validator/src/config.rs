//! Request limits
//!
//! Limits are plain serde data so they can live in an application's config
//! file next to everything else.

use serde::{Deserialize, Serialize};

/// Default cap on request bodies: 10 MiB.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 10 * 1024 * 1024;

/// Limits applied while reading request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    /// Largest accepted body in bytes.
    pub max_body_size: u64,
}

impl RequestLimits {
    /// Limits with the given body cap.
    #[must_use]
    pub const fn new(max_body_size: u64) -> Self {
        Self { max_body_size }
    }
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BODY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let limits: RequestLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, RequestLimits::default());
        assert_eq!(limits.max_body_size, DEFAULT_MAX_BODY_SIZE);
    }

    #[test]
    fn test_override() {
        let limits: RequestLimits = serde_json::from_str(r#"{"max_body_size":5}"#).unwrap();
        assert_eq!(limits, RequestLimits::new(5));
    }
}
