//! Voice port - Interface for speech synthesis

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{ArtifactId, Language};

use crate::error::ApplicationError;

/// Port for synthesizing alert text into a stored voice artifact
///
/// The returned identifier names an immutable audio file served by the audio
/// delivery endpoint; callers build the public URL from it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VoicePort: Send + Sync {
    /// Synthesize speech for `text` in `language` and persist it
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<ArtifactId, ApplicationError>;
}
