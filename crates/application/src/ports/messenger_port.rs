//! Messenger port - Interface for the messaging transport
//!
//! The transport delivers text bodies and media URLs to a recipient; the
//! remote party fetches media itself, so voice messages carry a URL rather
//! than inline audio bytes.

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::PhoneNumber;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An outgoing text message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Recipient's phone number
    pub recipient: PhoneNumber,
    /// Text content
    pub body: String,
}

impl OutgoingTextMessage {
    /// Create a new outgoing text message
    #[must_use]
    pub fn new(recipient: PhoneNumber, body: impl Into<String>) -> Self {
        Self {
            recipient,
            body: body.into(),
        }
    }
}

/// An outgoing media message referencing a publicly fetchable URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMediaMessage {
    /// Recipient's phone number
    pub recipient: PhoneNumber,
    /// URL the transport will fetch the media from
    pub media_url: String,
}

impl OutgoingMediaMessage {
    /// Create a new outgoing media message
    #[must_use]
    pub fn new(recipient: PhoneNumber, media_url: impl Into<String>) -> Self {
        Self {
            recipient,
            media_url: media_url.into(),
        }
    }
}

/// Port for the messaging transport
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Send a text message
    ///
    /// Returns the transport's message ID for the sent message.
    async fn send_text(&self, message: OutgoingTextMessage) -> Result<String, ApplicationError>;

    /// Send a media message (voice note referencing a fetchable URL)
    ///
    /// Returns the transport's message ID for the sent message.
    async fn send_media(&self, message: OutgoingMediaMessage) -> Result<String, ApplicationError>;
}
