//! Translation service integration
//!
//! HTTP client for a LibreTranslate-compatible translation API. Alert
//! messages are authored in English; translating into English is the
//! identity case and skips the network entirely.

pub mod client;

pub use client::{TranslateClient, TranslateConfig, TranslateError};
