//! User Name Value Object
//!
//! Display handle shown next to the email on lookups. Not unique and
//! not normalized: it is stored exactly as submitted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::validation::{FieldError, check_length};

const FIELD: &str = "username";

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        check_length(FIELD, &raw, USER_NAME_MIN_LENGTH, USER_NAME_MAX_LENGTH)?;
        Ok(Self(raw))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_bounds() {
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("a".repeat(20)).is_ok());
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("a".repeat(21)).is_err());
    }

    #[test]
    fn test_user_name_kept_verbatim() {
        let name = UserName::new("Mixed Case").unwrap();
        assert_eq!(name.as_str(), "Mixed Case");
    }

    #[test]
    fn test_user_name_only_length_checked() {
        assert_eq!(
            UserName::new("").unwrap_err().message,
            "\"username\" is not allowed to be empty"
        );
        assert_eq!(UserName::new("    ").unwrap().as_str(), "    ");
        assert!(UserName::new("ab\u{0007}c").is_ok());
    }
}
