//! Speech synthesis adapter for the voice port
//!
//! Combines the TTS engine with the artifact store: localized text goes in,
//! a stored artifact identifier comes out.

use std::sync::Arc;

use ai_speech::{ArtifactStore, TextToSpeech, lang};
use application::ApplicationError;
use application::ports::VoicePort;
use async_trait::async_trait;
use domain::{ArtifactId, Language};
use tracing::instrument;

/// Voice port implementation: synthesize then persist
pub struct SpeechVoiceAdapter {
    engine: Arc<dyn TextToSpeech>,
    store: ArtifactStore,
}

impl std::fmt::Debug for SpeechVoiceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechVoiceAdapter")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SpeechVoiceAdapter {
    /// Create a new adapter
    #[must_use]
    pub fn new(engine: Arc<dyn TextToSpeech>, store: ArtifactStore) -> Self {
        Self { engine, store }
    }
}

#[async_trait]
impl VoicePort for SpeechVoiceAdapter {
    #[instrument(skip(self, text), fields(language = %language, text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<ArtifactId, ApplicationError> {
        let code = lang::engine_code(language);

        let audio = self
            .engine
            .synthesize(text, code)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Speech synthesis: {e}")))?;

        self.store
            .write(audio)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Artifact store: {e}")))
    }
}
