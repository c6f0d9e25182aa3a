//! Alert dispatch configuration.

use serde::{Deserialize, Serialize};

/// Alert dispatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Farmer phone number receiving alerts (E.164)
    #[serde(default)]
    pub recipient: String,

    /// Public base URL voice artifacts are fetched from
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Pause between the text and voice sends, in milliseconds
    #[serde(default = "default_voice_send_delay_ms")]
    pub voice_send_delay_ms: u64,
}

fn default_public_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

const fn default_voice_send_delay_ms() -> u64 {
    1000
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            public_base_url: default_public_base_url(),
            voice_send_delay_ms: default_voice_send_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_development() {
        let config = AlertsConfig::default();
        assert_eq!(config.public_base_url, "http://127.0.0.1:3000");
        assert_eq!(config.voice_send_delay_ms, 1000);
        assert!(config.recipient.is_empty());
    }
}
