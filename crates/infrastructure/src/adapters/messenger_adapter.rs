//! Twilio adapter for the messenger port

use application::ApplicationError;
use application::ports::{MessengerPort, OutgoingMediaMessage, OutgoingTextMessage};
use async_trait::async_trait;
use integration_twilio::TwilioClient;
use tracing::instrument;

/// Messenger port implementation backed by the Twilio Messages API
#[derive(Debug, Clone)]
pub struct TwilioMessengerAdapter {
    client: TwilioClient,
}

impl TwilioMessengerAdapter {
    /// Create a new adapter around a configured client
    #[must_use]
    pub fn new(client: TwilioClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessengerPort for TwilioMessengerAdapter {
    #[instrument(skip(self, message), fields(recipient = %message.recipient))]
    async fn send_text(&self, message: OutgoingTextMessage) -> Result<String, ApplicationError> {
        let response = self
            .client
            .send_text(&message.recipient.whatsapp_address(), &message.body)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Twilio text send: {e}")))?;
        Ok(response.sid)
    }

    #[instrument(skip(self, message), fields(recipient = %message.recipient))]
    async fn send_media(&self, message: OutgoingMediaMessage) -> Result<String, ApplicationError> {
        let response = self
            .client
            .send_media(&message.recipient.whatsapp_address(), &message.media_url)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Twilio media send: {e}")))?;
        Ok(response.sid)
    }
}
