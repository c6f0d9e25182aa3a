//! Alert dispatcher
//!
//! Orchestrates one end-to-end alert delivery: evaluate the observation,
//! resolve the recipient's language, translate, send the text message, then
//! attempt voice delivery as a strictly best-effort secondary channel.
//!
//! Text delivery is the one required step — its failure fails the dispatch.
//! Everything after a confirmed text send (synthesis, voice send) is caught
//! and logged without changing the outcome.

use std::sync::Arc;
use std::time::Duration;

use domain::{AlertCategory, Observation, PhoneNumber, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    LanguageStorePort, MessengerPort, OutgoingMediaMessage, OutgoingTextMessage, TranslationPort,
    VoicePort,
};

/// Configuration for the alert dispatcher
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// The farmer receiving alerts
    pub recipient: PhoneNumber,
    /// Public base URL the transport fetches voice artifacts from
    pub public_base_url: String,
    /// Pause between the text and voice sends so they arrive in order
    pub voice_send_delay: Duration,
}

/// Result of one dispatch attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// No rule matched; nothing was sent
    NoAlert,
    /// The required text message was confirmed sent
    Delivered {
        category: AlertCategory,
        text_message_id: String,
        /// Present only if the best-effort voice send also succeeded
        #[serde(skip_serializing_if = "Option::is_none")]
        voice_message_id: Option<String>,
    },
}

impl DispatchOutcome {
    /// Whether the alert was delivered (text confirmed sent)
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Service that turns observations into delivered alerts
pub struct AlertDispatcher {
    messenger: Arc<dyn MessengerPort>,
    translator: Arc<dyn TranslationPort>,
    voice: Arc<dyn VoicePort>,
    languages: Arc<dyn LanguageStorePort>,
    config: DispatchConfig,
}

impl std::fmt::Debug for AlertDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertDispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AlertDispatcher {
    /// Create a new alert dispatcher
    #[must_use]
    pub fn new(
        messenger: Arc<dyn MessengerPort>,
        translator: Arc<dyn TranslationPort>,
        voice: Arc<dyn VoicePort>,
        languages: Arc<dyn LanguageStorePort>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            messenger,
            translator,
            voice,
            languages,
            config,
        }
    }

    /// Evaluate one observation and deliver the alert if a rule fires
    ///
    /// Returns `Ok(DispatchOutcome::NoAlert)` when no rule matches and
    /// `Err` only when the required text send fails. Voice delivery never
    /// affects the result.
    #[instrument(skip(self, observation), fields(node = %node))]
    pub async fn dispatch(
        &self,
        node: &str,
        observation: &Observation,
    ) -> Result<DispatchOutcome, ApplicationError> {
        let alert = rules::evaluate(node, observation);
        if !alert.is_firing() {
            debug!("No alert condition met");
            return Ok(DispatchOutcome::NoAlert);
        }

        let recipient = self.config.recipient.clone();
        let language = self.languages.language_for(&recipient).await;
        info!(category = %alert.category, %language, "Alert fired");

        let localized = match self.translator.translate(&alert.message, language).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Translation failed, falling back to original text");
                alert.message.clone()
            },
        };

        let text_message_id = self
            .messenger
            .send_text(OutgoingTextMessage::new(recipient.clone(), &localized))
            .await?;
        info!(message_id = %text_message_id, "Alert text sent");

        let voice_message_id = self.send_voice(&recipient, &localized, language).await;

        Ok(DispatchOutcome::Delivered {
            category: alert.category,
            text_message_id,
            voice_message_id,
        })
    }

    /// Best-effort voice delivery; every failure is logged and swallowed
    async fn send_voice(
        &self,
        recipient: &PhoneNumber,
        text: &str,
        language: domain::Language,
    ) -> Option<String> {
        let artifact = match self.voice.synthesize(text, language).await {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Voice synthesis failed, text already delivered");
                return None;
            },
        };

        // Let the transport settle so the voice note arrives after the text
        tokio::time::sleep(self.config.voice_send_delay).await;

        let media_url = format!(
            "{}/audio/{artifact}",
            self.config.public_base_url.trim_end_matches('/')
        );

        match self
            .messenger
            .send_media(OutgoingMediaMessage::new(recipient.clone(), media_url))
            .await
        {
            Ok(id) => {
                info!(message_id = %id, "Alert voice message sent");
                Some(id)
            },
            Err(e) => {
                warn!(error = %e, "Voice send failed, text already delivered");
                None
            },
        }
    }
}
