//! Profile Text Value Object
//!
//! Free-text profile attribute (`bio`, `interests`). Never stored here;
//! validated and forwarded to the Profile Service.

use crate::domain::validation::{FieldError, check_length};

pub const PROFILE_TEXT_MIN_LENGTH: usize = 1;
pub const PROFILE_TEXT_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileText(String);

impl ProfileText {
    /// `field` names the attribute in error messages
    pub fn new(field: &'static str, raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into();
        check_length(field, &raw, PROFILE_TEXT_MIN_LENGTH, PROFILE_TEXT_MAX_LENGTH)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_text_bounds() {
        assert!(ProfileText::new("bio", "x").is_ok());
        assert!(ProfileText::new("bio", "x".repeat(200)).is_ok());

        let err = ProfileText::new("interests", "x".repeat(201)).unwrap_err();
        assert_eq!(err.field, "interests");
        assert_eq!(
            err.message,
            "\"interests\" length must be less than or equal to 200 characters long"
        );
    }

    #[test]
    fn test_profile_text_empty() {
        let err = ProfileText::new("bio", "").unwrap_err();
        assert_eq!(err.message, "\"bio\" is not allowed to be empty");
    }
}
