//! Field Validation
//!
//! Value objects report a [`FieldError`]; registration collects them into
//! [`ValidationErrors`] in field order. Messages follow the
//! `"<field>" <problem>` shape clients already parse.

use std::borrow::Cow;
use std::fmt;

/// One rejected input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Schema field name, or the offending key for unknown keys
    pub field: Cow<'static, str>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Cow::Borrowed(field),
            message: message.into(),
        }
    }

    pub fn not_a_string(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" must be a string"))
    }

    /// Key outside the accepted set
    pub fn not_allowed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("\"{key}\" is not allowed"),
            field: Cow::Owned(key),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }

    pub fn empty(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed to be empty"))
    }
}

/// A body field as received, before any rule runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RawField {
    #[default]
    Missing,
    Text(String),
    /// Present, but `null`, a number, an object, ...
    NotText,
}

impl RawField {
    /// The text, or the error for a missing or non-string value
    pub fn require(self, field: &'static str) -> Result<String, FieldError> {
        match self {
            RawField::Text(text) => Ok(text),
            RawField::Missing => Err(FieldError::required(field)),
            RawField::NotText => Err(FieldError::not_a_string(field)),
        }
    }
}

impl From<&str> for RawField {
    fn from(text: &str) -> Self {
        RawField::Text(text.to_string())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// All field errors of one input, in the order fields were checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Keep the value on success, record the error otherwise
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(e) => write!(f, "{e}"),
            None => f.write_str("Validation failed"),
        }
    }
}

/// Check a character-count range (inclusive on both ends)
pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::empty(field));
    }

    let len = value.chars().count();
    if len < min {
        return Err(FieldError::new(
            field,
            format!("\"{field}\" length must be at least {min} characters long"),
        ));
    }
    if len > max {
        return Err(FieldError::new(
            field,
            format!("\"{field}\" length must be less than or equal to {max} characters long"),
        ));
    }

    Ok(())
}
