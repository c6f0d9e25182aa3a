//! Observation record produced by the upstream image-analysis step
//!
//! Every field is optional: the analysis model only emits what it could
//! determine for a cycle, so absence is the normal case, not an error.
//! Numeric fields arrive either as JSON numbers or as free-text strings
//! ("12%", " 25 ") and are parsed leniently — parsing never raises.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sensor/camera reading that may be numeric or free text
///
/// The original lexeme is preserved so alert messages can echo what the
/// analysis produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    /// Interpret the reading as a number, tolerating a trailing `%` and
    /// surrounding whitespace. Returns `None` when the text is not a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().trim_end_matches('%').trim_end().parse().ok(),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => {
                // Integer-valued readings render without a trailing ".0"
                if n.fract() == 0.0 && n.is_finite() {
                    #[allow(clippy::cast_possible_truncation)]
                    let whole = *n as i64;
                    write!(f, "{whole}")
                } else {
                    write!(f, "{n}")
                }
            },
            Self::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One analysis cycle's structured output for a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    /// Rain probability bucket (expected: Low / Medium / High)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_prob: Option<String>,

    /// Wind speed bucket (expected: Calm / Breezy / Strong)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,

    /// Soil moisture percentage, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moisture_pct: Option<Reading>,

    /// Crop health index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_index: Option<Reading>,

    /// Free-text summary from the analysis model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Observation {
    /// Whether the rain probability bucket is High (case-insensitive)
    pub fn rain_is_high(&self) -> bool {
        self.rain_prob
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("high"))
    }

    /// Whether the wind speed bucket is Strong (case-insensitive)
    pub fn wind_is_strong(&self) -> bool {
        self.wind_speed
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("strong"))
    }

    /// Soil moisture as a number, if the field is present
    ///
    /// An unparseable value maps to 100.0 (safely above every alert
    /// threshold) rather than an error.
    pub fn moisture_value(&self) -> Option<f64> {
        self.moisture_pct
            .as_ref()
            .map(|r| r.as_f64().unwrap_or(100.0))
    }
}
