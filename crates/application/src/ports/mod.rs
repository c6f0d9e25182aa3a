//! Port definitions for the application layer
//!
//! Ports are the seams between orchestration and the outside world; the
//! infrastructure layer provides the adapters.

pub mod language_store;
pub mod messenger_port;
pub mod translation_port;
pub mod voice_port;

pub use language_store::LanguageStorePort;
pub use messenger_port::{MessengerPort, OutgoingMediaMessage, OutgoingTextMessage};
pub use translation_port::TranslationPort;
pub use voice_port::VoicePort;

#[cfg(test)]
pub use language_store::MockLanguageStorePort;
#[cfg(test)]
pub use messenger_port::MockMessengerPort;
#[cfg(test)]
pub use translation_port::MockTranslationPort;
#[cfg(test)]
pub use voice_port::MockVoicePort;
