//! Alert language value object
//!
//! The closed set of languages a farmer can receive alerts in. English is the
//! default and the source language of every alert message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A supported alert language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English (default, source language of alert messages)
    #[default]
    English,
    Hindi,
    Punjabi,
    Marathi,
    Tamil,
    Telugu,
}

impl Language {
    /// All supported languages, in menu order
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::Hindi,
        Self::Punjabi,
        Self::Marathi,
        Self::Tamil,
        Self::Telugu,
    ];

    /// Human-readable language name
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Punjabi => "Punjabi",
            Self::Marathi => "Marathi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
        }
    }

    /// Parse a language from its name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DomainError::UnknownLanguage(name.to_string()))
    }

    /// Map a numeric menu selection ("1".."6") to a language
    pub fn from_selection(selection: &str) -> Result<Self, DomainError> {
        let index: usize = selection
            .trim()
            .parse()
            .map_err(|_| DomainError::UnknownLanguage(selection.to_string()))?;
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| DomainError::UnknownLanguage(selection.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn name_round_trips() {
        for lang in Language::ALL {
            assert_eq!(Language::from_name(lang.name()).unwrap(), lang);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Language::from_name("hindi").unwrap(), Language::Hindi);
        assert_eq!(Language::from_name("PUNJABI").unwrap(), Language::Punjabi);
        assert_eq!(Language::from_name("  Tamil  ").unwrap(), Language::Tamil);
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(Language::from_name("Klingon").is_err());
        assert!(Language::from_name("").is_err());
    }

    #[test]
    fn selection_maps_menu_order() {
        assert_eq!(Language::from_selection("1").unwrap(), Language::English);
        assert_eq!(Language::from_selection("2").unwrap(), Language::Hindi);
        assert_eq!(Language::from_selection("6").unwrap(), Language::Telugu);
    }

    #[test]
    fn selection_rejects_out_of_range() {
        assert!(Language::from_selection("0").is_err());
        assert!(Language::from_selection("7").is_err());
        assert!(Language::from_selection("START").is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Language::Marathi.to_string(), "Marathi");
    }

    #[test]
    fn serialization_uses_variant_name() {
        let json = serde_json::to_string(&Language::Telugu).unwrap();
        assert_eq!(json, "\"Telugu\"");
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Language::Telugu);
    }
}
