//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

use crate::types::AudioFormat;

/// Configuration for the speech-gateway TTS engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speech gateway base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, if the gateway requires one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Voice identifier (engine default when None)
    #[serde(default)]
    pub voice: Option<String>,

    /// Speaking speed (0.25 to 4.0)
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Output audio format
    #[serde(default = "default_output_format")]
    pub output_format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5002".to_string()
}

const fn default_speed() -> f32 {
    1.0
}

const fn default_output_format() -> AudioFormat {
    AudioFormat::Mp3
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            voice: None,
            speed: default_speed(),
            output_format: default_output_format(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Speech gateway base_url is required".to_string());
        }

        if !(0.25..=4.0).contains(&self.speed) {
            return Err(format!(
                "Speed must be between 0.25 and 4.0, got {}",
                self.speed
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpeechConfig::default();

        assert_eq!(config.base_url, "http://127.0.0.1:5002");
        assert!(config.api_key.is_none());
        assert!(config.voice.is_none());
        assert!((config.speed - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.output_format, AudioFormat::Mp3);
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn validate_succeeds_with_defaults() {
        assert!(SpeechConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_fails_with_empty_base_url() {
        let config = SpeechConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_invalid_speed() {
        let mut config = SpeechConfig {
            speed: 0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.speed = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            base_url = "http://tts.internal:8080"
            api_key = "key-123"
            voice = "female_a"
            speed = 0.9
            output_format = "mp3"
            timeout_ms = 60000
        "#;

        let config: SpeechConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.base_url, "http://tts.internal:8080");
        assert_eq!(config.api_key, Some("key-123".to_string()));
        assert_eq!(config.voice, Some("female_a".to_string()));
        assert!((config.speed - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.timeout_ms, 60000);
    }
}
