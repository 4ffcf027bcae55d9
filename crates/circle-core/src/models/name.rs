//! Person name value type.

use std::str::FromStr;

use crate::error::{Field, ValidationError};

/// A validated person name.
///
/// Names start with an alphanumeric character and may contain only
/// alphanumeric characters and spaces after that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Returns true if `text` satisfies the name format rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circle_core::models::Name;
    ///
    /// assert!(Name::is_valid_name("Alice Tan"));
    /// assert!(!Name::is_valid_name(" Alice"));
    /// assert!(!Name::is_valid_name("Alice*"));
    /// ```
    pub fn is_valid_name(text: &str) -> bool {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid_name(s) {
            return Err(ValidationError::invalid_format(
                Field::Name,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(s.to_string()))
    }
}
