//! Application configuration
//!
//! Layered loading: `config/agrivue.toml` (optional) overridden by
//! `AGRIVUE__`-prefixed environment variables (e.g.
//! `AGRIVUE__TWILIO__AUTH_TOKEN`). Every section carries serde defaults so a
//! missing file still yields a runnable development configuration.

pub mod alerts;
pub mod security;
pub mod server;
pub mod storage;

use ai_speech::SpeechConfig;
use integration_translate::TranslateConfig;
use integration_twilio::TwilioConfig;
use serde::{Deserialize, Serialize};

pub use alerts::AlertsConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Alert dispatch settings
    pub alerts: AlertsConfig,

    /// Twilio messaging transport
    pub twilio: TwilioConfig,

    /// Translation service
    pub translation: TranslateConfig,

    /// Speech synthesis engine
    pub speech: SpeechConfig,

    /// Persisted state locations
    pub storage: StorageConfig,

    /// Rate limiting
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error when a present file or environment value cannot be
    /// parsed into the configuration shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/agrivue").required(false))
            .add_source(
                config::Environment::with_prefix("AGRIVUE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
