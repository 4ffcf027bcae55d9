//! Core library for the Circle address book.
//!
//! Circle keeps contacts and the plans made with them in a single JSON file.
//! This crate provides the domain models, the [`AddressBook`] aggregate, the
//! record adapters that convert entities to and from their stored form, and
//! file storage.
//!
//! # Quick Start
//!
//! ```rust
//! use circle_core::{AddressBook, PersonRecord, PlanRecord, StorageBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! # let path = dir.path().join("addressbook.json");
//! let storage = StorageBuilder::new().with_data_path(Some(&path)).build()?;
//! let mut book = storage.read_address_book()?.unwrap_or_default();
//!
//! let alice = PersonRecord {
//!     name: Some("Alice".to_string()),
//!     phone: Some("98765432".to_string()),
//!     email: Some("alice@example.com".to_string()),
//! };
//! book.add_person(alice.to_entity()?)?;
//!
//! let dinner = PlanRecord {
//!     plan_name: Some("Dinner".to_string()),
//!     plan_date_time: Some("2024-12-25 18:00".to_string()),
//!     friend_name: Some("Alice".to_string()),
//! };
//! let plan = dinner.to_entity(&book)?;
//! book.add_plan(plan)?;
//!
//! storage.save_address_book(&book)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod address_book;
pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use address_book::AddressBook;
pub use catalog::ContactCatalog;
pub use display::{CreateResult, OperationStatus, Persons, Plans};
pub use error::{CircleError, EntityKind, Field, Result, ValidationError, ValidationErrorKind};
pub use models::{Email, Name, Person, Phone, Plan, PlanDateTime, PlanName};
pub use storage::{AddressBookRecord, JsonStorage, PersonRecord, PlanRecord, StorageBuilder};
