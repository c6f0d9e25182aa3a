//! Application layer for AgriVue
//!
//! Orchestrates the alert-dispatch pipeline over ports implemented by the
//! infrastructure layer: rule evaluation, language lookup, translation,
//! text delivery and best-effort voice delivery.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::alert_dispatcher::{AlertDispatcher, DispatchConfig, DispatchOutcome};
pub use services::language_selection::LanguageSelectionService;
