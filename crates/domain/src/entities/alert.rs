//! Alert decision derived from one observation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a fired alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertCategory {
    Rain,
    Wind,
    Soil,
    /// No rule matched
    None,
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rain => "RAIN",
            Self::Wind => "WIND",
            Self::Soil => "SOIL",
            Self::None => "NONE",
        };
        write!(f, "{name}")
    }
}

/// A decision to notify, with category and message
///
/// Produced fresh on each evaluation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub category: AlertCategory,
    pub message: String,
}

impl Alert {
    /// Build a firing alert
    pub fn new(category: AlertCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// The empty, non-firing alert
    pub fn none() -> Self {
        Self {
            category: AlertCategory::None,
            message: String::new(),
        }
    }

    /// Whether this alert should be dispatched
    pub fn is_firing(&self) -> bool {
        self.category != AlertCategory::None
    }
}
