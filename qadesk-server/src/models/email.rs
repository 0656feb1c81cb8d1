//! Email lookup key
//!
//! Only emptiness is checked. Format is deliberately not validated: the
//! value is compared verbatim against `qas.user_email`.

use std::fmt;

use super::ValidationError;

/// Non-empty email used to look up a user's items
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create an email key, rejecting the empty string.
    ///
    /// # Example
    /// ```
    /// use qadesk_server::models::EmailAddress;
    ///
    /// assert!(EmailAddress::new("a@x.com").is_ok());
    /// assert!(EmailAddress::new("").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(Self(s))
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        let err = EmailAddress::new("").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn keeps_value_verbatim() {
        // Whitespace is not trimmed; lookups match the stored value exactly.
        let email = EmailAddress::new(" a@x.com ").unwrap();
        assert_eq!(email.as_str(), " a@x.com ");
    }
}
