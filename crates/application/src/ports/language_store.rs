//! Language store port - Interface for the recipient language registry

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{Language, PhoneNumber};

use crate::error::ApplicationError;

/// Port for looking up and updating a recipient's preferred language
///
/// Lookup is deliberately infallible: a missing entry or an unreadable
/// backing store degrades silently to the default language, so an alert is
/// never lost to a registry problem.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LanguageStorePort: Send + Sync {
    /// The stored language for `recipient`, or the default if unknown
    async fn language_for(&self, recipient: &PhoneNumber) -> Language;

    /// Persist a language preference
    ///
    /// Updates must be atomic with respect to concurrent readers.
    async fn set_language(
        &self,
        recipient: &PhoneNumber,
        language: Language,
    ) -> Result<(), ApplicationError>;
}
