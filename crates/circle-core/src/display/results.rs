//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Person, Plan};

/// Wrapper type for displaying the result of add operations.
///
/// Formats a confirmation line followed by the added resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Person> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added person: {}", self.resource.name)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added plan: {} with {}",
            self.resource.name, self.resource.friend.name
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
