//! AI Speech - Text-to-Speech synthesis for voice alerts
//!
//! Provides the TTS abstraction and the voice artifact store:
//! - `TextToSpeech` - synthesize localized alert text into audio
//! - `ArtifactStore` - persist audio under collision-free identifiers
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! The synthesis engine is an HTTP speech gateway; the engine-specific
//! language codes live in `lang`.

pub mod config;
pub mod error;
pub mod lang;
pub mod ports;
pub mod providers;
pub mod store;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::gateway::SpeechGatewayProvider;
pub use store::ArtifactStore;
pub use types::{AudioData, AudioFormat};
