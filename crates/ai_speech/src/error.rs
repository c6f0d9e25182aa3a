//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech synthesis and artifact storage
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the synthesis engine
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the synthesis engine failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from the engine
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during synthesis
    #[error("Speech synthesis timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to persist a voice artifact
    #[error("Artifact storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
