use circle_core::{JsonStorage, StorageBuilder};
use tempfile::TempDir;

/// Helper function to create storage backed by a temporary file
pub fn create_test_storage() -> (TempDir, JsonStorage) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("addressbook.json");
    let storage = StorageBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .expect("Failed to create storage");
    (temp_dir, storage)
}
