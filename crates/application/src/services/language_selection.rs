//! Language selection conversation
//!
//! Handles the inbound WhatsApp dialogue: START shows the numbered language
//! menu, a digit persists the choice, anything else gets a pointer back to
//! START. Replies are plain text; the presentation layer wraps them for the
//! transport.

use std::fmt::Write as _;
use std::sync::Arc;

use domain::{Language, PhoneNumber};
use tracing::{info, instrument, warn};

use crate::ports::LanguageStorePort;

/// Service behind the inbound language-selection webhook
pub struct LanguageSelectionService {
    languages: Arc<dyn LanguageStorePort>,
}

impl std::fmt::Debug for LanguageSelectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSelectionService").finish_non_exhaustive()
    }
}

impl LanguageSelectionService {
    /// Create a new language selection service
    #[must_use]
    pub fn new(languages: Arc<dyn LanguageStorePort>) -> Self {
        Self { languages }
    }

    /// Handle one inbound message and produce the reply text
    #[instrument(skip(self, body), fields(from = %from))]
    pub async fn handle_message(&self, from: &PhoneNumber, body: &str) -> String {
        let text = body.trim();

        if text.eq_ignore_ascii_case("start") {
            return Self::menu();
        }

        if let Ok(language) = Language::from_selection(text) {
            return match self.languages.set_language(from, language).await {
                Ok(()) => {
                    info!(%language, "Language preference saved");
                    format!(
                        "✅ Language set to {language}\n\n\
                         You will now receive all weather alerts in this language 🌾"
                    )
                },
                Err(e) => {
                    warn!(error = %e, "Failed to save language preference");
                    "⚠️ Could not save your selection, please try again.".to_string()
                },
            };
        }

        "❓ I didn't understand.\n\nSend *START* to choose your language.".to_string()
    }

    /// The numbered welcome menu
    fn menu() -> String {
        let mut menu = String::from("👋 Welcome to AgriVue 🌱\n\nChoose your language:\n");
        for (i, language) in Language::ALL.iter().enumerate() {
            let _ = writeln!(menu, "{}. {language}", i + 1);
        }
        let _ = write!(menu, "\nReply with a number from 1 to {}", Language::ALL.len());
        menu
    }
}
