use std::sync::Arc;

use hangar_core::{Store, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store over a temporary database
pub async fn create_test_store() -> (TempDir, Arc<Store>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, Arc::new(store))
}
