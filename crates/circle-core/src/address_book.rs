//! The address book aggregate: contacts and the plans made with them.

use std::collections::HashMap;

use crate::{
    catalog::ContactCatalog,
    error::{CircleError, Result},
    models::{Name, Person, Plan},
};

/// Holds every person and plan, enforcing unique person names and unique
/// plans.
///
/// Persons are indexed by name so that friend lookups during plan loading
/// are constant time.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
    plans: Vec<Plan>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person.
    ///
    /// # Errors
    ///
    /// Returns `CircleError::DuplicatePerson` if a person with the same name
    /// is already present.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.has_person(&person.name) {
            return Err(CircleError::DuplicatePerson {
                name: person.name.as_str().to_string(),
            });
        }
        self.index
            .insert(person.name.as_str().to_string(), self.persons.len());
        self.persons.push(person);
        Ok(())
    }

    pub fn has_person(&self, name: &Name) -> bool {
        self.index.contains_key(name.as_str())
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Adds a plan whose friend is already in this address book.
    ///
    /// # Errors
    ///
    /// Returns `CircleError::PersonNotFound` if the friend is unknown, or
    /// `CircleError::DuplicatePlan` if the same plan is already present.
    pub fn add_plan(&mut self, plan: Plan) -> Result<()> {
        if !self.has_person(&plan.friend.name) {
            return Err(CircleError::PersonNotFound {
                name: plan.friend.name.as_str().to_string(),
            });
        }
        if self.has_plan(&plan) {
            return Err(CircleError::DuplicatePlan {
                name: plan.name.as_str().to_string(),
                date_time: plan.date_time.to_string(),
                friend: plan.friend.name.as_str().to_string(),
            });
        }
        self.plans.push(plan);
        Ok(())
    }

    pub fn has_plan(&self, plan: &Plan) -> bool {
        self.plans.iter().any(|existing| existing.is_same_plan(plan))
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }
}

impl ContactCatalog for AddressBook {
    fn has_contact(&self, name: &Name) -> bool {
        self.has_person(name)
    }

    fn contacts(&self) -> &[Person] {
        &self.persons
    }

    fn find_contact(&self, name: &Name) -> Option<&Person> {
        self.index
            .get(name.as_str())
            .and_then(|&position| self.persons.get(position))
    }
}
