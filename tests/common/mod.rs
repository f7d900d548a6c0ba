// Common test utilities for integration tests

use std::sync::Arc;

use admin_mirror::AppData;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates AppData over a fresh in-memory database
#[allow(dead_code)]
pub async fn setup_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::init(db))
}
