//! Serialized form of a [`Person`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EntityKind, Field, ValidationError},
    models::{Email, Name, Person, Phone},
};

/// Flat representation of a person as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PersonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PersonRecord {
    pub fn from_entity(person: &Person) -> Self {
        Self {
            name: Some(person.name.to_string()),
            phone: Some(person.phone.to_string()),
            email: Some(person.email.to_string()),
        }
    }

    /// Validates this record and rebuilds the person.
    ///
    /// Fields are checked in order: name, phone, email.
    pub fn to_entity(&self) -> Result<Person, ValidationError> {
        let name: Name = required(self.name.as_deref(), Field::Name)?.parse()?;
        let phone: Phone = required(self.phone.as_deref(), Field::Phone)?.parse()?;
        let email: Email = required(self.email.as_deref(), Field::Email)?.parse()?;
        Ok(Person::new(name, phone, email))
    }
}

fn required(value: Option<&str>, field: Field) -> Result<&str, ValidationError> {
    value.ok_or_else(|| ValidationError::missing_field(EntityKind::Person, field))
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self::from_entity(person)
    }
}
