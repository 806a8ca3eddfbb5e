//! Validated registration input
//!
//! Each field the caller submits passes through a newtype before it can
//! reach storage. Checks are structural only (present, non-empty, not
//! absurdly long); field contents are stored exactly as submitted, and
//! uniqueness is the DB constraint's job. Identity (the `id` column) is
//! never part of the input; storage assigns it at commit time.

use chrono::NaiveDate;

use super::ValidationError;

/// Maximum length for a full name
const MAX_NAME_LEN: usize = 256;

/// Maximum length for an email address (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// Maximum length for an identity number
const MAX_IDENTITY_NUMBER_LEN: usize = 64;

/// Validated full name (free text, non-empty, stored as submitted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if s.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated email address (non-empty free text; the DB unique
/// constraint is the real gate)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// # Example
    /// ```
    /// use registrar_server::models::EmailAddress;
    ///
    /// assert!(EmailAddress::new("a@x.com").is_ok());
    /// assert!(EmailAddress::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        if s.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated identity number (external-world unique identifier)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityNumber(String);

impl IdentityNumber {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "identity_number",
            });
        }
        if s.len() > MAX_IDENTITY_NUMBER_LEN {
            return Err(ValidationError::TooLong {
                field: "identity_number",
                max: MAX_IDENTITY_NUMBER_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated creation input for one user record.
///
/// Holds everything the insert needs except the id, which storage
/// assigns exactly once at commit.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: FullName,
    pub identity_number: IdentityNumber,
    pub email: EmailAddress,
    pub date_of_birth: NaiveDate,
}
