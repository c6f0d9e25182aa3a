//! Adapters binding external integrations to the application ports

pub mod messenger_adapter;
pub mod translation_adapter;
pub mod voice_adapter;

pub use messenger_adapter::TwilioMessengerAdapter;
pub use translation_adapter::HttpTranslationAdapter;
pub use voice_adapter::SpeechVoiceAdapter;
