//! Translation port - Interface for the message translation service

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::Language;

use crate::error::ApplicationError;

/// Port for translating alert text into a recipient's language
///
/// Implementations must treat translation into the source language (English)
/// as the identity case. Failures are ordinary errors; the dispatcher falls
/// back to the untranslated message.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate `text` into `target`, returning the localized text
    async fn translate(&self, text: &str, target: Language) -> Result<String, ApplicationError>;
}
