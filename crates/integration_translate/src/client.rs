//! LibreTranslate-compatible translation client

use std::time::Duration;

use domain::Language;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Translation client errors
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Connection to the translation service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the translation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service rejected the request
    #[error("Translation rejected: {0}")]
    Rejected(String),

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Translation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Translation API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, if the service requires one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Map an alert language to the translation API's ISO code
#[must_use]
pub const fn iso_code(language: Language) -> &'static str {
    match language {
        Language::English => "en",
        Language::Hindi => "hi",
        Language::Punjabi => "pa",
        Language::Marathi => "mr",
        Language::Tamil => "ta",
        Language::Telugu => "te",
    }
}

/// Request body for `POST /translate`
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Response body from `POST /translate`
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: String,
}

/// HTTP translation client
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: Client,
    config: TranslateConfig,
}

impl TranslateClient {
    /// Create a new translation client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TranslateConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Translate English text into `target`
    ///
    /// Translating into English returns the input unchanged without a
    /// network call.
    #[instrument(skip(self, text), fields(target = %target, text_len = text.len()))]
    pub async fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError> {
        if target == Language::English {
            debug!("Identity translation, skipping request");
            return Ok(text.to_string());
        }

        let request = TranslateRequest {
            q: text,
            source: iso_code(Language::English),
            target: iso_code(target),
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let url = format!("{}/translate", self.config.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(TranslateError::Rejected(api_error.error));
            }
            return Err(TranslateError::Rejected(format!("HTTP {status}: {body}")));
        }

        let translated: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::ParseError(e.to_string()))?;

        debug!(
            translated_len = translated.translated_text.len(),
            "Translation complete"
        );
        Ok(translated.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_iso_code() {
        for language in Language::ALL {
            assert!(!iso_code(language).is_empty());
        }
    }

    #[test]
    fn config_default_values() {
        let config = TranslateConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn english_is_identity_without_network() {
        // base_url points nowhere; an identity translation must not touch it
        let config = TranslateConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let client = TranslateClient::new(config).unwrap();

        let out = client
            .translate("🌧️ RAIN ALERT", Language::English)
            .await
            .unwrap();
        assert_eq!(out, "🌧️ RAIN ALERT");
    }

    #[test]
    fn request_serialization_skips_absent_api_key() {
        let request = TranslateRequest {
            q: "hello",
            source: "en",
            target: "hi",
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("api_key"));
        assert!(json.contains("\"target\":\"hi\""));
    }
}
