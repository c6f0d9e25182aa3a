//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Twilio messenger,
//! the translation client, speech synthesis plus artifact storage, and the
//! persisted language registry. Also owns application configuration.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{HttpTranslationAdapter, SpeechVoiceAdapter, TwilioMessengerAdapter};
pub use config::{AlertsConfig, AppConfig, SecurityConfig, ServerConfig, StorageConfig};
pub use persistence::JsonLanguageStore;
