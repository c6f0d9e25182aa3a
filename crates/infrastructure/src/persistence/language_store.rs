//! Persisted language registry
//!
//! A JSON file mapping E.164 phone numbers to language names, cached in
//! memory behind a `RwLock`. Updates write the whole map to a named temp
//! file in the same directory and rename it into place, so a concurrent
//! reader of the file sees either the old or the new mapping, never a
//! partial write.
//!
//! Lookup never fails: a missing or unreadable file degrades to an empty
//! registry and every unknown recipient gets the default language.

use std::collections::HashMap;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use application::ApplicationError;
use application::ports::LanguageStorePort;
use async_trait::async_trait;
use domain::{Language, PhoneNumber};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// File-backed language registry
#[derive(Debug)]
pub struct JsonLanguageStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Language>>,
}

impl JsonLanguageStore {
    /// Open the registry at `path`, loading existing entries if present
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        info!(path = %path.display(), entries = entries.len(), "Language registry opened");
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Read the backing file, degrading silently to an empty registry
    fn load(path: &Path) -> HashMap<String, Language> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Language registry unreadable, using defaults");
                return HashMap::new();
            },
        };

        match serde_json::from_slice(&data) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Language registry corrupt, using defaults");
                HashMap::new()
            },
        }
    }

    /// Write the full map atomically (temp file + rename)
    fn write_atomic(path: &Path, entries: &HashMap<String, Language>) -> std::io::Result<()> {
        // The temp file must live next to the target: rename is only atomic
        // within one filesystem
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        let data = serde_json::to_vec_pretty(entries)?;
        tmp.write_all(&data)?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Number of stored preferences
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the registry has no stored preferences
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LanguageStorePort for JsonLanguageStore {
    async fn language_for(&self, recipient: &PhoneNumber) -> Language {
        self.entries
            .read()
            .await
            .get(recipient.as_str())
            .copied()
            .unwrap_or_default()
    }

    #[instrument(skip(self), fields(recipient = %recipient, language = %language))]
    async fn set_language(
        &self,
        recipient: &PhoneNumber,
        language: Language,
    ) -> Result<(), ApplicationError> {
        // The write guard is held across the file swap so concurrent updates
        // serialize and the file always reflects some full map state.
        let mut entries = self.entries.write().await;
        entries.insert(recipient.as_str().to_string(), language);

        let path = self.path.clone();
        let snapshot = entries.clone();
        tokio::task::spawn_blocking(move || Self::write_atomic(&path, &snapshot))
            .await
            .map_err(|e| ApplicationError::Persistence(format!("write task failed: {e}")))?
            .map_err(|e| ApplicationError::Persistence(e.to_string()))?;

        debug!("Language preference persisted");
        Ok(())
    }
}
