//! Synthesis-engine language codes
//!
//! Fixed lookup from alert language to the engine's language code. The
//! fallback for anything the engine does not know is English.

use domain::Language;

/// Default engine code when no mapping exists
pub const DEFAULT_ENGINE_CODE: &str = "en";

/// Map an alert language to the synthesis engine's language code
#[must_use]
pub const fn engine_code(language: Language) -> &'static str {
    match language {
        Language::English => "en",
        Language::Hindi => "hi",
        Language::Punjabi => "pa",
        Language::Marathi => "mr",
        Language::Tamil => "ta",
        Language::Telugu => "te",
    }
}
