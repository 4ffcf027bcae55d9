//! Contact detail value types: phone numbers and email addresses.

use std::str::FromStr;

use crate::error::{Field, ValidationError};

/// A validated phone number of at least three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid_phone(text: &str) -> bool {
        text.len() >= 3 && text.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid_phone(s) {
            return Err(ValidationError::invalid_format(
                Field::Phone,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(s.to_string()))
    }
}

/// A validated email address of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

const LOCAL_PART_SPECIAL_CHARACTERS: &[char] = &['+', '_', '.', '-'];

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Returns true if `text` is a well-formed email address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circle_core::models::Email;
    ///
    /// assert!(Email::is_valid_email("alice@example.com"));
    /// assert!(!Email::is_valid_email("alice@example"));
    /// assert!(!Email::is_valid_email("-alice@example.com"));
    /// ```
    pub fn is_valid_email(text: &str) -> bool {
        let Some((local, domain)) = text.split_once('@') else {
            return false;
        };
        is_valid_local_part(local) && is_valid_domain(domain)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_local_part(local: &str) -> bool {
    let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIAL_CHARACTERS.contains(&c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let last_is_long_enough = labels.last().is_some_and(|label| label.len() >= 2);
    last_is_long_enough && labels.iter().all(|label| is_valid_domain_label(label))
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid_email(s) {
            return Err(ValidationError::invalid_format(
                Field::Email,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(s.to_string()))
    }
}
