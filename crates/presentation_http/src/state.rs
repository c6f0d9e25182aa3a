//! Application state shared across handlers

use std::path::PathBuf;
use std::sync::Arc;

use application::{AlertDispatcher, LanguageSelectionService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Alert dispatch pipeline
    pub dispatcher: Arc<AlertDispatcher>,
    /// Inbound language-selection conversation
    pub language_selection: Arc<LanguageSelectionService>,
    /// Directory voice artifacts are served from
    pub audio_dir: Arc<PathBuf>,
}
