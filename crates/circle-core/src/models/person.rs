//! Person model definition.

use super::{Email, Name, Phone};

/// A contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Display name, unique within an address book
    pub name: Name,

    /// Phone number
    pub phone: Phone,

    /// Email address
    pub email: Email,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email) -> Self {
        Self { name, phone, email }
    }

    /// Returns true if both persons have the same name.
    ///
    /// This is a weaker notion of equality than `==` and is what the address
    /// book uses to reject duplicates.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}
