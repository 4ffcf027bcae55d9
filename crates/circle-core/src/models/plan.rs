//! Plan model definition and its value types.

use std::str::FromStr;

use jiff::civil::DateTime;

use super::Person;
use crate::error::{Field, ValidationError};

/// A validated plan name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanName(String);

const PLAN_NAME_PUNCTUATION: &[char] = &['-', '\'', '&', ',', '.', '!', '?'];

impl PlanName {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Plan names should start with an alphanumeric \
character and only contain alphanumeric characters, spaces and - ' & , . ! ?";

    /// Returns true if `text` satisfies the plan name format rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circle_core::models::PlanName;
    ///
    /// assert!(PlanName::is_valid_plan_name("Dinner & drinks"));
    /// assert!(!PlanName::is_valid_plan_name("- dinner"));
    /// ```
    pub fn is_valid_plan_name(text: &str) -> bool {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => chars.all(|c| {
                c.is_ascii_alphanumeric() || c == ' ' || PLAN_NAME_PUNCTUATION.contains(&c)
            }),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlanName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid_plan_name(s) {
            return Err(ValidationError::invalid_format(
                Field::PlanName,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(s.to_string()))
    }
}

/// The minute-precision local date and time a plan is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanDateTime(DateTime);

impl PlanDateTime {
    /// strftime/strptime pattern used for both parsing and display.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M";

    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Plan date-time should be in the format YYYY-MM-DD HH:MM and be a valid date and time";

    pub fn is_valid_plan_date_time(text: &str) -> bool {
        Self::parse_exact(text).is_some()
    }

    /// Parses `text` only if it is already in canonical form.
    ///
    /// strptime tolerates unpadded fields, signs and leading whitespace, so
    /// the parsed value must format back to exactly the input.
    fn parse_exact(text: &str) -> Option<DateTime> {
        let parsed = DateTime::strptime(Self::FORMAT, text).ok()?;
        (parsed.strftime(Self::FORMAT).to_string() == text).then_some(parsed)
    }

    pub fn as_datetime(&self) -> DateTime {
        self.0
    }
}

impl FromStr for PlanDateTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(s).map(Self).ok_or_else(|| {
            ValidationError::invalid_format(Field::PlanDateTime, Self::MESSAGE_CONSTRAINTS)
        })
    }
}

/// A scheduled event with one friend from the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Name of the plan
    pub name: PlanName,

    /// When the plan takes place
    pub date_time: PlanDateTime,

    /// The contact the plan is made with
    pub friend: Person,
}

impl Plan {
    pub fn new(name: PlanName, date_time: PlanDateTime, friend: Person) -> Self {
        Self {
            name,
            date_time,
            friend,
        }
    }

    /// Returns true if both plans share name, time and friend.
    pub fn is_same_plan(&self, other: &Plan) -> bool {
        self.name == other.name
            && self.date_time == other.date_time
            && self.friend.is_same_person(&other.friend)
    }
}
