//! Read-only view of the contacts a plan may refer to.

use crate::models::{Name, Person};

/// A source of known contacts, consulted when resolving a plan's friend.
///
/// Record adapters only read from a catalog; they never mutate it.
pub trait ContactCatalog {
    /// Returns true if a contact with this name exists.
    fn has_contact(&self, name: &Name) -> bool;

    /// All contacts, in catalog order.
    fn contacts(&self) -> &[Person];

    /// Looks up the contact with this name.
    ///
    /// The default implementation scans [`ContactCatalog::contacts`];
    /// implementations that keep an index should override it.
    fn find_contact(&self, name: &Name) -> Option<&Person> {
        self.contacts().iter().find(|person| &person.name == name)
    }
}

impl ContactCatalog for [Person] {
    fn has_contact(&self, name: &Name) -> bool {
        self.iter().any(|person| &person.name == name)
    }

    fn contacts(&self) -> &[Person] {
        self
    }
}

impl ContactCatalog for Vec<Person> {
    fn has_contact(&self, name: &Name) -> bool {
        self.as_slice().has_contact(name)
    }

    fn contacts(&self) -> &[Person] {
        self
    }
}
