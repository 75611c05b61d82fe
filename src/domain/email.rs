//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// A normalized, syntactically valid email address.
///
/// Construction trims and lower-cases the input, then checks it against the
/// accepted syntax. Typo detection is separate (see
/// [`TypoGuard`](crate::matching::TypoGuard)) because it depends on the
/// configured provider list.
///
/// # Example
///
/// ```
/// use contact_desk::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Jane.Doe@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "jane.doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize and validate an email address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the normalized address
    /// fails [`EmailAddress::validate_format`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = Self::normalize(email.as_ref());

        if !Self::validate_format(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Trim surrounding whitespace and lower-case.
    pub fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Check email syntax.
    ///
    /// The local part allows letters, digits and `. _ % + -`; domain labels
    /// allow letters, digits and `-`; the top-level suffix is at least two
    /// letters. The first domain label must contain a letter, which rejects
    /// purely numeric hosts such as `user@333.com`.
    pub fn validate_format(email: &str) -> bool {
        if !EMAIL_REGEX.is_match(email) {
            return false;
        }

        email
            .split_once('@')
            .and_then(|(_, domain)| domain.split('.').next())
            .is_some_and(|label| label.chars().any(|c| c.is_ascii_alphabetic()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
