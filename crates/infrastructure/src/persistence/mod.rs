//! Persistence adapters

pub mod language_store;

pub use language_store::JsonLanguageStore;
