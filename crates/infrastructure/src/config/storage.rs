//! Persisted state locations.

use serde::{Deserialize, Serialize};

/// Filesystem locations for persisted state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory voice artifacts are written to and served from
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    /// Path of the language preference store
    #[serde(default = "default_language_file")]
    pub language_file: String,
}

fn default_audio_dir() -> String {
    "data/audio".to_string()
}

fn default_language_file() -> String {
    "data/farmers.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            language_file: default_language_file(),
        }
    }
}
