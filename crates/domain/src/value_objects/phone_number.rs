//! Phone number value object with E.164 validation
//!
//! Also understands the `whatsapp:` transport addressing scheme used by the
//! messaging API: parsing strips an existing prefix and
//! [`PhoneNumber::whatsapp_address`] adds exactly one, so normalization is
//! idempotent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated phone number in E.164 format (e.g., +919876543210)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Create a new phone number, validating E.164 format
    ///
    /// Accepts an optional `whatsapp:` prefix (already-normalized transport
    /// addresses round-trip unchanged). E.164 format:
    /// - Starts with +
    /// - Contains only digits after +
    /// - Length: 7-15 digits (including country code)
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let raw = number.into();
        let trimmed = raw.trim();
        let without_scheme = trimmed.strip_prefix("whatsapp:").unwrap_or(trimmed);
        let value = without_scheme.replace([' ', '-', '(', ')'], "");

        if !value.starts_with('+') {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must start with +".to_string(),
            ));
        }

        let digits = &value[1..];
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must contain only digits after +".to_string(),
            ));
        }

        if digits.len() < 7 || digits.len() > 15 {
            return Err(DomainError::InvalidPhoneNumber(
                "Phone number must have 7-15 digits".to_string(),
            ));
        }

        Ok(Self { value })
    }

    /// Get the phone number as a string slice (E.164 format)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get digits only (without +)
    pub fn digits(&self) -> &str {
        &self.value[1..]
    }

    /// The transport address for WhatsApp messaging (`whatsapp:+E164`)
    pub fn whatsapp_address(&self) -> String {
        format!("whatsapp:{}", self.value)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn valid_e164_numbers_accepted(digits in "[0-9]{7,14}") {
            let phone_str = format!("+{digits}");
            prop_assert!(PhoneNumber::new(&phone_str).is_ok());
        }

        #[test]
        fn normalization_is_idempotent(digits in "[0-9]{7,14}") {
            let phone = PhoneNumber::new(format!("+{digits}")).unwrap();
            let addr = phone.whatsapp_address();
            let reparsed = PhoneNumber::new(&addr).unwrap();
            prop_assert_eq!(reparsed.whatsapp_address(), addr);
        }

        #[test]
        fn numbers_without_plus_rejected(digits in "[0-9]{7,14}") {
            prop_assert!(PhoneNumber::new(&digits).is_err());
        }

        #[test]
        fn phone_roundtrips_through_display(digits in "[0-9]{7,12}") {
            let phone = PhoneNumber::new(format!("+{digits}")).unwrap();
            let reparsed = PhoneNumber::new(phone.to_string()).unwrap();
            prop_assert_eq!(phone, reparsed);
        }
    }
}
