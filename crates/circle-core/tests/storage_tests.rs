mod common;

use std::fs;

use circle_core::{
    AddressBook, CircleError, EntityKind, Field, PersonRecord, PlanRecord, StorageBuilder,
    ValidationErrorKind,
};
use common::create_test_storage;
use tempfile::TempDir;

fn person_record(name: &str, phone: &str) -> PersonRecord {
    PersonRecord {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
    }
}

fn plan_record(name: &str, at: &str, friend: &str) -> PlanRecord {
    PlanRecord {
        plan_name: Some(name.to_string()),
        plan_date_time: Some(at.to_string()),
        friend_name: Some(friend.to_string()),
    }
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_person(person_record("Alice", "98765432").to_entity().unwrap())
        .unwrap();
    book.add_person(person_record("Bob", "12345678").to_entity().unwrap())
        .unwrap();
    let dinner = plan_record("Dinner", "2024-12-25 18:00", "Alice")
        .to_entity(&book)
        .unwrap();
    book.add_plan(dinner).unwrap();
    let hike = plan_record("Morning hike", "2025-01-04 07:30", "Bob")
        .to_entity(&book)
        .unwrap();
    book.add_plan(hike).unwrap();
    book
}

#[test]
fn test_read_missing_file_returns_none() {
    let (_temp_dir, storage) = create_test_storage();

    let book = storage.read_address_book().expect("Failed to read");
    assert!(book.is_none());
}

#[test]
fn test_save_and_read_round_trip() {
    let (_temp_dir, storage) = create_test_storage();
    let book = sample_book();

    storage.save_address_book(&book).expect("Failed to save");
    let loaded = storage
        .read_address_book()
        .expect("Failed to read")
        .expect("Address book should exist");

    assert_eq!(loaded.persons(), book.persons());
    assert_eq!(loaded.plans(), book.plans());
}

#[test]
fn test_saved_file_uses_record_field_names() {
    let (_temp_dir, storage) = create_test_storage();
    storage.save_address_book(&sample_book()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
    assert_eq!(json["plans"][0]["planName"], "Dinner");
    assert_eq!(json["plans"][0]["planDateTime"], "2024-12-25 18:00");
    assert_eq!(json["plans"][0]["friend"], "Alice");
    assert_eq!(json["persons"][1]["name"], "Bob");
}

#[test]
fn test_read_rejects_plan_with_unknown_friend() {
    let (_temp_dir, storage) = create_test_storage();
    fs::write(
        storage.path(),
        r#"{
            "persons": [{"name": "Alice", "phone": "98765432", "email": "alice@example.com"}],
            "plans": [{"planName": "Dinner", "planDateTime": "2024-12-25 18:00", "friend": "Carol"}]
        }"#,
    )
    .unwrap();

    let err = storage.read_address_book().unwrap_err();
    assert_eq!(
        err.as_validation().map(|e| e.kind()),
        Some(ValidationErrorKind::ReferenceNotFound(EntityKind::Person))
    );
}

#[test]
fn test_read_rejects_plan_with_bad_date_time() {
    let (_temp_dir, storage) = create_test_storage();
    fs::write(
        storage.path(),
        r#"{
            "persons": [{"name": "Alice", "phone": "98765432", "email": "alice@example.com"}],
            "plans": [{"planName": "Dinner", "planDateTime": "not-a-date", "friend": "Alice"}]
        }"#,
    )
    .unwrap();

    let err = storage.read_address_book().unwrap_err();
    assert_eq!(
        err.as_validation().map(|e| e.kind()),
        Some(ValidationErrorKind::InvalidFormat(Field::PlanDateTime))
    );
}

#[test]
fn test_read_rejects_duplicate_persons() {
    let (_temp_dir, storage) = create_test_storage();
    fs::write(
        storage.path(),
        r#"{
            "persons": [
                {"name": "Alice", "phone": "98765432", "email": "alice@example.com"},
                {"name": "Alice", "phone": "11111111", "email": "other@example.com"}
            ]
        }"#,
    )
    .unwrap();

    match storage.read_address_book() {
        Err(CircleError::DuplicatePerson { name }) => assert_eq!(name, "Alice"),
        other => panic!("Expected DuplicatePerson error, got {other:?}"),
    }
}

#[test]
fn test_read_malformed_json() {
    let (_temp_dir, storage) = create_test_storage();
    fs::write(storage.path(), "{ not json").unwrap();

    assert!(matches!(
        storage.read_address_book(),
        Err(CircleError::Serialization { .. })
    ));
}

#[test]
fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("nested").join("dir").join("book.json");

    let storage = StorageBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create storage");

    assert_eq!(storage.path(), data_path.as_path());
    assert!(data_path.parent().unwrap().is_dir());
}
