//! Data models for persons and plans.
//!
//! Value types (`Name`, `PlanName`, `PlanDateTime`, `Phone`, `Email`) own
//! their format rules: each exposes an `is_valid_*` check, a
//! `MESSAGE_CONSTRAINTS` constant and a `FromStr` implementation that returns
//! a [`crate::error::ValidationError`] on malformed input. Entities are built
//! only from already-validated values, so a `Person` or `Plan` is valid by
//! construction.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use circle_core::models::{Person, Plan};
//!
//! # fn example() -> Result<(), circle_core::ValidationError> {
//! let alice = Person::new(
//!     "Alice".parse()?,
//!     "98765432".parse()?,
//!     "alice@example.com".parse()?,
//! );
//! let plan = Plan::new("Dinner".parse()?, "2024-12-25 18:00".parse()?, alice);
//! assert_eq!(plan.friend.name.as_str(), "Alice");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod contact;
pub mod name;
pub mod person;
pub mod plan;


pub use contact::{Email, Phone};
pub use name::Name;
pub use person::Person;
pub use plan::{Plan, PlanDateTime, PlanName};
