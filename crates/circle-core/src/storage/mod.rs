//! JSON persistence for the address book.
//!
//! Entities never touch serde directly. Each has a flat record type that
//! mirrors the file format, and the record converts to and from the entity:
//!
//! ```text
//! ┌─────────────────┐  from_entity   ┌─────────────────┐   serde_json   ┌──────────┐
//! │  AddressBook    │───────────────▶│ AddressBookRecord│──────────────▶│   file   │
//! │ (Person, Plan)  │◀───────────────│ (PersonRecord,  │◀──────────────│          │
//! └─────────────────┘   to_entity    │  PlanRecord)    │                └──────────┘
//!                     (validating)   └─────────────────┘
//! ```
//!
//! Loading validates every field and resolves each plan's friend against the
//! persons loaded before it, so a file that loads is a valid address book.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    address_book::AddressBook,
    error::{CircleError, IoResultExt, Result},
};

pub mod address_book_record;
pub mod builder;
pub mod person_record;
pub mod plan_record;

pub use address_book_record::AddressBookRecord;
pub use builder::StorageBuilder;
pub use person_record::PersonRecord;
pub use plan_record::PlanRecord;

/// Reads and writes the address book as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the address book file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the address book.
    ///
    /// Returns `Ok(None)` if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// * `CircleError::FileSystem` - the file exists but cannot be read
    /// * `CircleError::Serialization` - the file is not valid JSON
    /// * `CircleError::Validation` - a record fails validation
    /// * `CircleError::DuplicatePerson` / `DuplicatePlan` - repeated entries
    pub fn read_address_book(&self) -> Result<Option<AddressBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No address book at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(CircleError::file_system(&self.path).with_source(e)),
        };

        let record: AddressBookRecord = serde_json::from_str(&contents)?;
        let book = record.to_model()?;
        debug!(
            "Loaded {} persons and {} plans from {}",
            book.persons().len(),
            book.plans().len(),
            self.path.display()
        );
        Ok(Some(book))
    }

    /// Writes the address book, replacing any existing file.
    pub fn save_address_book(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).path_context(parent)?;
        }

        let json = serde_json::to_string_pretty(&AddressBookRecord::from_model(book))?;
        fs::write(&self.path, json).path_context(&self.path)?;
        debug!(
            "Saved {} persons and {} plans to {}",
            book.persons().len(),
            book.plans().len(),
            self.path.display()
        );
        Ok(())
    }
}
