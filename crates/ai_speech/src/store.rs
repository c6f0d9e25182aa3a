//! Voice artifact store
//!
//! Persists synthesized audio under randomly generated identifiers. Writes
//! go to a named temp file in the storage directory and are renamed into
//! place, so a reader can never observe a zero-byte or truncated artifact.
//! Identifiers are collision-resistant (128-bit random), so concurrent
//! writes need no coordination.

use std::io::Write;
use std::path::{Path, PathBuf};

use domain::ArtifactId;
use tracing::{debug, instrument};

use crate::error::SpeechError;
use crate::types::AudioData;

/// Filesystem store for voice artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `dir`
    ///
    /// The directory is created on first write if absent.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the path of an artifact inside the storage directory
    #[must_use]
    pub fn path_for(&self, id: &ArtifactId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Persist audio under a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Storage` if the directory cannot be created or
    /// the artifact cannot be written.
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    pub async fn write(&self, audio: AudioData) -> Result<ArtifactId, SpeechError> {
        let id = ArtifactId::generate();
        let dir = self.dir.clone();
        let path = self.path_for(&id);
        let data = audio.into_data();

        // Temp file and rename stay on one filesystem, keeping the swap atomic
        tokio::task::spawn_blocking(move || -> Result<(), SpeechError> {
            std::fs::create_dir_all(&dir)?;
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&data)?;
            tmp.flush()?;
            tmp.persist(&path).map_err(|e| SpeechError::Storage(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| SpeechError::Storage(std::io::Error::other(format!("write task failed: {e}"))))??;

        debug!(artifact = %id, "Voice artifact written");
        Ok(id)
    }
}
