//! Email Value Object
//!
//! A syntactically valid, lowercased email address. Uniqueness is the
//! store's job; this type only guarantees shape and length.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldError, check_length};

const FIELD: &str = "email";

/// Minimum email length
pub const EMAIL_MIN_LENGTH: usize = 5;

/// Maximum email length
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> Result<Self, FieldError> {
        let email = email.into().trim().to_lowercase();

        check_length(FIELD, &email, EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH)?;

        if !Self::is_valid_format(&email) {
            return Err(FieldError::new(FIELD, "\"email\" must be a valid email"));
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if domain.contains('@') {
            return false;
        }

        if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains("..")
        {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
