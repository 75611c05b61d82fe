//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const INTERNATIONAL_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// A phone number in canonical display form.
///
/// The raw input is classified by how many digits it contains:
///
/// - 10 digits: North American, shown as `(XXX) XXX-XXXX`
/// - 11 digits with a leading `1`: shown as `+1 (XXX) XXX-XXXX`
/// - 7 to 15 digits: international, kept as typed if it starts with `+`,
///   otherwise rewritten as `+` followed by the digits
///
/// Anything else is rejected. Normalizing an already canonical number
/// returns it unchanged.
///
/// # Example
///
/// ```
/// use contact_desk::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("555.123.4567").unwrap();
/// assert_eq!(phone.as_str(), "(555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a raw phone string and convert it to canonical form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPhone` if the input has no digits and
    /// `ValidationError::InvalidPhone` if the digit count fits no format.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let digits = Self::strip_non_digits(raw);

        if digits.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        let normalized = match digits.len() {
            10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..]),
            11 if digits.starts_with('1') => {
                format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
            }
            n if INTERNATIONAL_DIGITS.contains(&n) => {
                let trimmed = raw.trim();
                if trimmed.starts_with('+') {
                    trimmed.to_string()
                } else {
                    format!("+{}", digits)
                }
            }
            _ => return Err(ValidationError::InvalidPhone(raw.trim().to_string())),
        };

        Ok(Self(normalized))
    }

    fn strip_non_digits(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        Self::strip_non_digits(&self.0)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize through normalization
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> String {
        PhoneNumber::new(raw).unwrap().into_inner()
    }

    #[test]
    fn test_ten_digits_north_american() {
        assert_eq!(normalize("5551234567"), "(555) 123-4567");
        assert_eq!(normalize("555-123-4567"), "(555) 123-4567");
        assert_eq!(normalize(" (555) 123 4567 "), "(555) 123-4567");
    }

    #[test]
    fn test_eleven_digits_with_country_code() {
        assert_eq!(normalize("15551234567"), "+1 (555) 123-4567");
        assert_eq!(normalize("+1 555 123 4567"), "+1 (555) 123-4567");
        assert_eq!(normalize("1-800-555-0199"), "+1 (800) 555-0199");
    }

    #[test]
    fn test_international_preserves_leading_plus() {
        assert_eq!(normalize("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(normalize("  +44 20 7946 0958  "), "+44 20 7946 0958");
    }

    #[test]
    fn test_international_without_plus_is_prefixed() {
        assert_eq!(normalize("442079460958"), "+442079460958");
        assert_eq!(normalize("1234567"), "+1234567");
        // 11 digits not starting with 1 fall through to international
        assert_eq!(normalize("25551234567"), "+25551234567");
    }

    #[test]
    fn test_empty_phone_rejected() {
        assert_eq!(PhoneNumber::new(""), Err(ValidationError::EmptyPhone));
        assert_eq!(PhoneNumber::new("  "), Err(ValidationError::EmptyPhone));
        assert_eq!(PhoneNumber::new("call me"), Err(ValidationError::EmptyPhone));
    }

    #[test]
    fn test_bad_lengths_rejected() {
        assert!(matches!(
            PhoneNumber::new("123456"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(matches!(
            PhoneNumber::new("1234567890123456"),
            Err(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in [
            "5551234567",
            "15551234567",
            "+44 20 7946 0958",
            "442079460958",
            "+49-30-1234567",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_digits_only() {
        let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
        assert_eq!(phone.digits_only(), "15551234567");
    }

    #[test]
    fn test_phone_serde() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"(555) 123-4567\"");

        let parsed: PhoneNumber = serde_json::from_str("\"(555) 123-4567\"").unwrap();
        assert_eq!(parsed, phone);

        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
