use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the app shell. Every field has a default, so a partial JSON
/// document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Browser storage key holding the persisted identity.
    pub session_key: String,
    /// Simulated latency between submitting a listing and the redirect.
    pub submit_delay_ms: u64,
    /// Image used when a listing is created without photos.
    pub placeholder_image: String,
    /// Classification label given to freshly created listings.
    pub pending_label: String,
    pub brand: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: "user".into(),
            submit_delay_ms: 500,
            placeholder_image: "/placeholder.svg".into(),
            pending_label: "Pending AI Analysis".into(),
            brand: "re-mate".into(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"submit_delay_ms": 0}"#).unwrap();
        assert_eq!(config.submit_delay(), Duration::ZERO);
        assert_eq!(config.session_key, "user");
        assert_eq!(config.placeholder_image, "/placeholder.svg");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{").is_err());
    }
}
