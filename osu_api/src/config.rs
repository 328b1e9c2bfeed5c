//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout applied when none (or zero) is configured, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Options accepted by [`Client::new`](crate::Client::new).
///
/// Deserializable so callers can keep it in whatever config format they
/// already use:
///
/// ```json
/// { "token": "your-api-key", "timeout_ms": 10000 }
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientOptions {
    /// osu! API key. Required; absent and empty are both rejected by
    /// [`Client::new`](crate::Client::new).
    #[serde(default)]
    pub token: String,
    /// Deadline for a whole request, in milliseconds. `None` or `0` uses
    /// [`DEFAULT_TIMEOUT_MS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl ClientOptions {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            timeout_ms: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// The effective request deadline.
    pub fn timeout(&self) -> Duration {
        match self.timeout_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ClientOptions, DEFAULT_TIMEOUT_MS};

    #[test]
    fn timeout_defaults_when_absent_or_zero() {
        let default = Duration::from_millis(DEFAULT_TIMEOUT_MS);
        assert_eq!(ClientOptions::new("key").timeout(), default);
        assert_eq!(ClientOptions::new("key").with_timeout_ms(0).timeout(), default);
        assert_eq!(
            ClientOptions::new("key").with_timeout_ms(250).timeout(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn deserialize_from_json() {
        let options: ClientOptions =
            serde_json::from_str(r#"{"token": "abc", "timeout_ms": 1500}"#).unwrap();
        assert_eq!(options.token, "abc");
        assert_eq!(options.timeout(), Duration::from_millis(1500));

        let options: ClientOptions = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(options.timeout_ms, None);
    }

    #[test]
    fn missing_token_deserializes_as_empty() {
        let options: ClientOptions = serde_json::from_str(r#"{"timeout_ms": 1500}"#).unwrap();
        assert!(options.token.is_empty());

        let err = crate::Client::new(options).unwrap_err();
        assert!(matches!(err, crate::Error::MissingToken));
    }

    #[test]
    fn debug_hides_token() {
        let debug = format!("{:?}", ClientOptions::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }
}
