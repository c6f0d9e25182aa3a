//! Twilio client for sending WhatsApp messages
//!
//! Uses the Twilio Messages API. Text messages carry a `Body`; voice alerts
//! carry a `MediaUrl` the recipient's client fetches.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Twilio API errors
#[derive(Debug, Error)]
pub enum TwilioError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {code} - {message}")]
    Api { code: i64, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid recipient address: {0}")]
    InvalidAddress(String),
}

/// Twilio client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    /// Account SID
    #[serde(default)]
    pub account_sid: String,

    /// Auth token
    #[serde(default)]
    pub auth_token: String,

    /// Sender address (e.g. `whatsapp:+14155238886`)
    #[serde(default)]
    pub from_number: String,

    /// API base URL (overridable for tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.twilio.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Twilio Messages API client
#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: Client,
    config: TwilioConfig,
    messages_url: String,
}

/// Form parameters for creating a message
#[derive(Debug, Serialize)]
struct SendMessageForm<'a> {
    #[serde(rename = "From")]
    from: &'a str,
    #[serde(rename = "To")]
    to: &'a str,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(rename = "MediaUrl", skip_serializing_if = "Option::is_none")]
    media_url: Option<&'a str>,
}

/// API response for a created message
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Message SID (e.g. `SM...` / `MM...`)
    pub sid: String,
    /// Delivery status at creation time (`queued`, `sending`, ...)
    #[serde(default)]
    pub status: String,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    code: i64,
    message: String,
}

impl TwilioClient {
    /// Create a new Twilio client
    pub fn new(config: TwilioConfig) -> Result<Self, TwilioError> {
        if config.account_sid.is_empty() {
            return Err(TwilioError::Configuration(
                "account_sid is required".to_string(),
            ));
        }
        if config.auth_token.is_empty() {
            return Err(TwilioError::Configuration(
                "auth_token is required".to_string(),
            ));
        }
        if config.from_number.is_empty() {
            return Err(TwilioError::Configuration(
                "from_number is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TwilioError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        let messages_url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            config.base_url.trim_end_matches('/'),
            config.account_sid
        );

        Ok(Self {
            client,
            config,
            messages_url,
        })
    }

    /// Send a text message
    #[instrument(skip(self, body), fields(to = %to))]
    pub async fn send_text(&self, to: &str, body: &str) -> Result<MessageResponse, TwilioError> {
        Self::validate_address(to)?;

        debug!(body_len = body.len(), "Sending WhatsApp text message");

        self.send(SendMessageForm {
            from: &self.config.from_number,
            to,
            body: Some(body),
            media_url: None,
        })
        .await
    }

    /// Send a media message referencing a fetchable URL
    #[instrument(skip(self), fields(to = %to))]
    pub async fn send_media(
        &self,
        to: &str,
        media_url: &str,
    ) -> Result<MessageResponse, TwilioError> {
        Self::validate_address(to)?;

        debug!(%media_url, "Sending WhatsApp media message");

        self.send(SendMessageForm {
            from: &self.config.from_number,
            to,
            body: None,
            media_url: Some(media_url),
        })
        .await
    }

    async fn send(&self, form: SendMessageForm<'_>) -> Result<MessageResponse, TwilioError> {
        let response = self
            .client
            .post(&self.messages_url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&form)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error: ApiErrorResponse = response.json().await?;
            Err(TwilioError::Api {
                code: error.code,
                message: error.message,
            })
        }
    }

    /// Validate a WhatsApp transport address (`whatsapp:+E164`)
    fn validate_address(to: &str) -> Result<(), TwilioError> {
        let Some(number) = to.strip_prefix("whatsapp:") else {
            return Err(TwilioError::InvalidAddress(to.to_string()));
        };
        if !number.starts_with('+') || number.len() < 8 {
            return Err(TwilioError::InvalidAddress(to.to_string()));
        }
        Ok(())
    }
}
