//! Port definition for speech synthesis
//!
//! Defines the trait (port) that synthesis adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for Text-to-Speech implementations
///
/// Implementations convert localized alert text into audio, selecting the
/// engine voice by language code.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for `text` in the engine language `lang_code`
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, lang_code: &str) -> Result<AudioData, SpeechError>;

    /// Check if the synthesis engine is reachable
    async fn is_available(&self) -> bool;
}
