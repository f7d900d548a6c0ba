use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::AdminStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created exactly once in main.rs and handed to the
/// services that need them, instead of services reaching for ambient global
/// state. The database connection is the process-wide handle to the external
/// store; everything else is derived from it.
pub struct AppData {
    pub db: DatabaseConnection,
    pub admin_store: Arc<AdminStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be initialized and migrated before
    /// calling this. Safe to call more than once (each call builds an
    /// independent set of store handles over the same connection pool),
    /// though main.rs only ever calls it once.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let admin_store = Arc::new(AdminStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self { db, admin_store }
    }
}
