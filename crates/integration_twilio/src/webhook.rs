//! Inbound Twilio webhook payload
//!
//! Twilio delivers inbound WhatsApp messages as a form-encoded POST. Only
//! the fields the language-selection flow needs are modeled; everything else
//! in the payload is ignored.

use serde::Deserialize;

/// One inbound message as posted by the Twilio webhook
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    /// Sender transport address (e.g. `whatsapp:+919876543210`)
    #[serde(rename = "From")]
    pub from: String,

    /// Message text
    #[serde(rename = "Body", default)]
    pub body: String,

    /// Twilio message SID
    #[serde(rename = "MessageSid", default)]
    pub message_sid: String,
}
