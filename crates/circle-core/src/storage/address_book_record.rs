//! Serialized form of the whole [`AddressBook`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PersonRecord, PlanRecord};
use crate::{address_book::AddressBook, error::Result};

/// The document written to the address book file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddressBookRecord {
    #[serde(default)]
    pub persons: Vec<PersonRecord>,
    #[serde(default)]
    pub plans: Vec<PlanRecord>,
}

impl AddressBookRecord {
    pub fn from_model(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(PersonRecord::from).collect(),
            plans: book.plans().iter().map(PlanRecord::from).collect(),
        }
    }

    /// Rebuilds the address book, loading every person before any plan so that
    /// plans can resolve their friends.
    ///
    /// Stops at the first invalid or duplicate entry.
    pub fn to_model(&self) -> Result<AddressBook> {
        let mut book = AddressBook::new();
        for record in &self.persons {
            book.add_person(record.to_entity()?)?;
        }
        for record in &self.plans {
            let plan = record.to_entity(&book)?;
            book.add_plan(plan)?;
        }
        Ok(book)
    }
}
