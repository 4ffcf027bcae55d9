//! Serialized form of a [`Plan`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::ContactCatalog,
    error::{EntityKind, Field, ValidationError},
    models::{Name, Plan, PlanDateTime, PlanName},
};

/// Flat, string-keyed representation of a plan as stored on disk.
///
/// Every field is optional so that a damaged file still deserializes and the
/// problem is reported by [`PlanRecord::to_entity`] with a precise message.
/// The friend is stored by display name and resolved against the contact
/// catalog on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_date_time: Option<String>,
    /// Display name of the contact the plan is made with
    #[serde(rename = "friend", default, skip_serializing_if = "Option::is_none")]
    pub friend_name: Option<String>,
}

impl PlanRecord {
    /// Captures the fields of a plan for storage.
    pub fn from_entity(plan: &Plan) -> Self {
        Self {
            plan_name: Some(plan.name.to_string()),
            plan_date_time: Some(plan.date_time.to_string()),
            friend_name: Some(plan.friend.name.to_string()),
        }
    }

    /// Validates this record and rebuilds the plan, resolving the friend in
    /// `catalog`.
    ///
    /// Checks run in a fixed order and the first failure is returned: the
    /// friend (presence, format, existence), then the plan name, then the
    /// date-time.
    ///
    /// # Errors
    ///
    /// * `MissingField` - a field is absent
    /// * `InvalidFormat` - a field violates its value type's format rules
    /// * `ReferenceNotFound` - the friend is not in `catalog`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use circle_core::{models::Person, storage::PlanRecord};
    ///
    /// # fn example() -> Result<(), circle_core::ValidationError> {
    /// let alice = Person::new("Alice".parse()?, "98765432".parse()?, "alice@example.com".parse()?);
    /// let catalog = vec![alice.clone()];
    ///
    /// let record = PlanRecord {
    ///     plan_name: Some("Dinner".to_string()),
    ///     plan_date_time: Some("2024-12-25 18:00".to_string()),
    ///     friend_name: Some("Alice".to_string()),
    /// };
    /// let plan = record.to_entity(&catalog)?;
    /// assert_eq!(plan.friend, alice);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn to_entity<C>(&self, catalog: &C) -> Result<Plan, ValidationError>
    where
        C: ContactCatalog + ?Sized,
    {
        let friend_name = self
            .friend_name
            .as_deref()
            .ok_or_else(|| ValidationError::missing_field(EntityKind::Plan, Field::FriendName))?;
        let friend_name: Name = friend_name.parse()?;
        if !catalog.has_contact(&friend_name) {
            return Err(ValidationError::reference_not_found(EntityKind::Person));
        }
        let friend = catalog
            .find_contact(&friend_name)
            .ok_or_else(|| ValidationError::reference_not_found(EntityKind::Person))?
            .clone();

        let name: PlanName = self
            .plan_name
            .as_deref()
            .ok_or_else(|| ValidationError::missing_field(EntityKind::Plan, Field::PlanName))?
            .parse()?;

        let date_time: PlanDateTime = self
            .plan_date_time
            .as_deref()
            .ok_or_else(|| ValidationError::missing_field(EntityKind::Plan, Field::PlanDateTime))?
            .parse()?;

        Ok(Plan::new(name, date_time, friend))
    }
}

impl From<&Plan> for PlanRecord {
    fn from(plan: &Plan) -> Self {
        Self::from_entity(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ValidationErrorKind,
        models::{Person, PlanName},
        AddressBook,
    };

    fn alice() -> Person {
        Person::new(
            "Alice".parse().unwrap(),
            "98765432".parse().unwrap(),
            "alice@example.com".parse().unwrap(),
        )
    }

    fn catalog_with_alice() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();
        book
    }

    fn dinner_record() -> PlanRecord {
        PlanRecord {
            plan_name: Some("Dinner".to_string()),
            plan_date_time: Some("2024-12-25 18:00".to_string()),
            friend_name: Some("Alice".to_string()),
        }
    }

    fn kind_of(record: &PlanRecord, catalog: &AddressBook) -> ValidationErrorKind {
        record.to_entity(catalog).unwrap_err().kind()
    }

    #[test]
    fn test_valid_record_converts() {
        let plan = dinner_record().to_entity(&catalog_with_alice()).unwrap();

        assert_eq!(plan.name.as_str(), "Dinner");
        assert_eq!(plan.date_time.to_string(), "2024-12-25 18:00");
        assert_eq!(plan.friend, alice());
    }

    #[test]
    fn test_round_trip_through_record() {
        let catalog = catalog_with_alice();
        let plan = dinner_record().to_entity(&catalog).unwrap();

        let record = PlanRecord::from_entity(&plan);
        assert_eq!(record, dinner_record());
        assert_eq!(record.to_entity(&catalog).unwrap(), plan);
    }

    #[test]
    fn test_missing_friend() {
        let record = PlanRecord {
            friend_name: None,
            ..dinner_record()
        };
        let err = record.to_entity(&catalog_with_alice()).unwrap_err();

        assert_eq!(err.kind(), ValidationErrorKind::MissingField(Field::FriendName));
        assert_eq!(err.to_string(), "Plan's friend name field is missing!");
    }

    #[test]
    fn test_missing_friend_reported_before_other_fields() {
        let record = PlanRecord::default();
        assert_eq!(
            kind_of(&record, &catalog_with_alice()),
            ValidationErrorKind::MissingField(Field::FriendName)
        );
    }

    #[test]
    fn test_invalid_friend_name() {
        for bad in ["", " Alice", "Al!ce", "@lice", "Alice\t"] {
            let record = PlanRecord {
                friend_name: Some(bad.to_string()),
                ..dinner_record()
            };
            let err = record.to_entity(&catalog_with_alice()).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::InvalidFormat(Field::Name), "{bad:?}");
            assert_eq!(err.message(), Name::MESSAGE_CONSTRAINTS);
        }
    }

    #[test]
    fn test_unknown_friend() {
        let record = PlanRecord {
            friend_name: Some("Bob".to_string()),
            ..dinner_record()
        };
        let err = record.to_entity(&catalog_with_alice()).unwrap_err();

        assert_eq!(
            err.kind(),
            ValidationErrorKind::ReferenceNotFound(EntityKind::Person)
        );
        assert_eq!(err.message(), ValidationError::MESSAGE_PERSON_DOES_NOT_EXIST);
    }

    #[test]
    fn test_unknown_friend_in_empty_catalog() {
        let empty: Vec<Person> = Vec::new();
        let err = dinner_record().to_entity(&empty).unwrap_err();
        assert_eq!(
            err.kind(),
            ValidationErrorKind::ReferenceNotFound(EntityKind::Person)
        );
    }

    #[test]
    fn test_friend_lookup_is_exact() {
        let record = PlanRecord {
            friend_name: Some("alice".to_string()),
            ..dinner_record()
        };
        assert_eq!(
            kind_of(&record, &catalog_with_alice()),
            ValidationErrorKind::ReferenceNotFound(EntityKind::Person)
        );
    }

    #[test]
    fn test_missing_plan_name_checked_after_friend() {
        let record = PlanRecord {
            plan_name: None,
            ..dinner_record()
        };
        let err = record.to_entity(&catalog_with_alice()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField(Field::PlanName));
        assert_eq!(err.to_string(), "Plan's plan name field is missing!");

        // With an unknown friend, the friend error wins.
        let record = PlanRecord {
            plan_name: None,
            friend_name: Some("Bob".to_string()),
            ..dinner_record()
        };
        assert_eq!(
            kind_of(&record, &catalog_with_alice()),
            ValidationErrorKind::ReferenceNotFound(EntityKind::Person)
        );
    }

    #[test]
    fn test_invalid_plan_name() {
        let record = PlanRecord {
            plan_name: Some("#dinner".to_string()),
            ..dinner_record()
        };
        let err = record.to_entity(&catalog_with_alice()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidFormat(Field::PlanName));
        assert_eq!(err.message(), PlanName::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_missing_date_time() {
        let record = PlanRecord {
            plan_date_time: None,
            ..dinner_record()
        };
        let err = record.to_entity(&catalog_with_alice()).unwrap_err();
        assert_eq!(
            err.kind(),
            ValidationErrorKind::MissingField(Field::PlanDateTime)
        );
        assert_eq!(err.to_string(), "Plan's plan date-time field is missing!");
    }

    #[test]
    fn test_invalid_date_time() {
        let record = PlanRecord {
            plan_date_time: Some("not-a-date".to_string()),
            ..dinner_record()
        };
        let err = record.to_entity(&catalog_with_alice()).unwrap_err();
        assert_eq!(
            err.kind(),
            ValidationErrorKind::InvalidFormat(Field::PlanDateTime)
        );
        assert_eq!(err.message(), PlanDateTime::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_unpadded_date_time_is_invalid() {
        for text in ["2024-1-5 9:00", "24-12-25 18:00", " 2024-12-25 18:00"] {
            let record = PlanRecord {
                plan_date_time: Some(text.to_string()),
                ..dinner_record()
            };
            let err = record.to_entity(&catalog_with_alice()).unwrap_err();
            assert_eq!(
                err.kind(),
                ValidationErrorKind::InvalidFormat(Field::PlanDateTime),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_plan_name_checked_before_date_time() {
        let record = PlanRecord {
            plan_name: Some("#dinner".to_string()),
            plan_date_time: None,
            ..dinner_record()
        };
        assert_eq!(
            kind_of(&record, &catalog_with_alice()),
            ValidationErrorKind::InvalidFormat(Field::PlanName)
        );
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(dinner_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "planName": "Dinner",
                "planDateTime": "2024-12-25 18:00",
                "friend": "Alice"
            })
        );

        let partial: PlanRecord = serde_json::from_str(r#"{"planName": "Dinner"}"#).unwrap();
        assert_eq!(partial.plan_name.as_deref(), Some("Dinner"));
        assert_eq!(partial.plan_date_time, None);
        assert_eq!(partial.friend_name, None);
    }
}
