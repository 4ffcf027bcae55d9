//! Display formatting for models, collections and operation results.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.
//!
//! - [`models`]: `Display` implementations for value types and entities
//! - [`collections`]: list wrappers with empty-list handling
//! - [`results`]: wrappers for the outcome of add operations
//! - [`status`]: success/failure confirmation lines
//!
//! # Examples
//!
//! ```rust
//! use circle_core::{display::Plans, AddressBook};
//!
//! let book = AddressBook::new();
//! assert_eq!(format!("{}", Plans(book.plans())), "No plans found.\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Persons, Plans};
pub use results::CreateResult;
pub use status::OperationStatus;
