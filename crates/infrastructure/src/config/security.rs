//! Rate limiting configuration.

use serde::{Deserialize, Serialize};

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Enable the per-IP rate limiter
    #[serde(default = "default_true")]
    pub rate_limit_enabled: bool,

    /// Maximum requests per minute per client IP
    #[serde(default = "default_rate_limit_rpm")]
    pub rate_limit_rpm: u32,
}

const fn default_true() -> bool {
    true
}

const fn default_rate_limit_rpm() -> u32 {
    60
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            rate_limit_enabled: default_true(),
            rate_limit_rpm: default_rate_limit_rpm(),
        }
    }
}
