//! Speech-gateway TTS provider
//!
//! Implements `TextToSpeech` against an HTTP speech gateway exposing
//! `POST /api/tts` with a JSON body and raw audio bytes in the response.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::AudioData;

/// The gateway rejects inputs beyond this length
const MAX_INPUT_CHARS: usize = 4096;

/// HTTP speech-gateway provider
#[derive(Debug, Clone)]
pub struct SpeechGatewayProvider {
    client: Client,
    config: SpeechConfig,
}

/// Gateway synthesis request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    input: &'a str,
    language: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

/// Gateway API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl SpeechGatewayProvider {
    /// Create a new speech-gateway provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/api/tts", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextToSpeech for SpeechGatewayProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), lang = %lang_code))]
    async fn synthesize(&self, text: &str, lang_code: &str) -> Result<AudioData, SpeechError> {
        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        if text.len() > MAX_INPUT_CHARS {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {} characters exceeds {MAX_INPUT_CHARS} limit",
                text.len()
            )));
        }

        let request = TtsRequest {
            input: text,
            language: lang_code,
            format: self.config.output_format.extension(),
            voice: self.config.voice.as_deref(),
            speed: if (self.config.speed - 1.0).abs() < f32::EPSILON {
                None
            } else {
                Some(self.config.speed)
            },
        };

        let mut builder = self.client.post(self.tts_url()).json(&request);
        if let Some(key) = self.config.api_key.as_deref() {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(SpeechError::RateLimited),
                    _ => Err(SpeechError::SynthesisFailed(api_error.error.message)),
                };
            }

            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio_bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Engine returned empty audio".to_string(),
            ));
        }

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(AudioData::new(
            audio_bytes.to_vec(),
            self.config.output_format,
        ))
    }

    async fn is_available(&self) -> bool {
        let health_url = format!("{}/health", self.config.base_url.trim_end_matches('/'));

        match self
            .client
            .get(&health_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Speech gateway availability check failed: {}", e);
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_creation_succeeds_with_defaults() {
        assert!(SpeechGatewayProvider::new(SpeechConfig::default()).is_ok());
    }

    #[test]
    fn provider_creation_rejects_invalid_config() {
        let config = SpeechConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            SpeechGatewayProvider::new(config),
            Err(SpeechError::Configuration(_))
        ));
    }

    #[test]
    fn tts_url_strips_trailing_slash() {
        let config = SpeechConfig {
            base_url: "http://tts.internal:8080/".to_string(),
            ..Default::default()
        };
        let provider = SpeechGatewayProvider::new(config).unwrap();
        assert_eq!(provider.tts_url(), "http://tts.internal:8080/api/tts");
    }

    #[tokio::test]
    async fn synthesize_rejects_empty_text() {
        let provider = SpeechGatewayProvider::new(SpeechConfig::default()).unwrap();
        let result = provider.synthesize("", "en").await;
        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_rejects_oversized_text() {
        let provider = SpeechGatewayProvider::new(SpeechConfig::default()).unwrap();
        let text = "a".repeat(MAX_INPUT_CHARS + 1);
        let result = provider.synthesize(&text, "en").await;
        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[test]
    fn request_skips_default_speed() {
        let request = TtsRequest {
            input: "hi",
            language: "en",
            format: "mp3",
            voice: None,
            speed: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("speed"));
        assert!(!json.contains("voice"));
    }
}
