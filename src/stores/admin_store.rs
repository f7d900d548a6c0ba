use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::errors::InternalError;
use crate::types::db::admin::{self, Entity as Admin};
use crate::types::internal::snapshot::AdminProjection;

/// AdminStore owns the derived admins collection
///
/// Rows are keyed by the upstream user id and only ever written by the
/// mirror service; nothing else creates or mutates them. Concurrent writers
/// for the same id are not serialized here - per-row write ordering is the
/// database's job.
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    /// Create a new AdminStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Merge-upsert the admin record for a user
    ///
    /// Creates the row if absent; on conflict updates only the projected
    /// columns (plus `updated_at`), so anything outside the projection -
    /// notably `created_at` - is left untouched on an existing row. Absent
    /// source fields are written as NULL.
    ///
    /// # Errors
    /// Returns `InternalError::Database` when the write fails; the caller
    /// propagates it unhandled.
    pub async fn upsert_merge(
        &self,
        user_id: &str,
        projection: &AdminProjection,
    ) -> Result<(), InternalError> {
        let now = Utc::now().timestamp();

        let model = admin::ActiveModel {
            id: Set(user_id.to_string()),
            email: Set(projection.email.clone()),
            school_id: Set(projection.school_id.clone()),
            school_name: Set(projection.school_name.clone()),
            full_name: Set(projection.full_name.clone()),
            is_mentor: Set(projection.is_mentor),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Admin::insert(model)
            .on_conflict(
                OnConflict::column(admin::Column::Id)
                    .update_columns([
                        admin::Column::Email,
                        admin::Column::SchoolId,
                        admin::Column::SchoolName,
                        admin::Column::FullName,
                        admin::Column::IsMentor,
                        admin::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("upsert_admin", e))?;

        tracing::debug!("Upserted admin record for user {}", user_id);

        Ok(())
    }

    /// Delete the admin record for a user
    ///
    /// Deleting a row that does not exist is a no-op, never an error.
    pub async fn delete(&self, user_id: &str) -> Result<(), InternalError> {
        let result = Admin::delete_by_id(user_id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_admin", e))?;

        if result.rows_affected == 0 {
            tracing::debug!("No admin record to delete for user {}", user_id);
        }

        Ok(())
    }

    /// Look up the admin record for a user, if any
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<admin::Model>, InternalError> {
        Admin::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_admin", e))
    }
}
