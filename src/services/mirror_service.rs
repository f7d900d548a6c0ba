use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::stores::AdminStore;
use crate::types::internal::snapshot::{AdminProjection, UserSnapshot};

/// The store operation a change pair calls for
#[derive(Debug, Clone, PartialEq)]
pub enum MirrorPlan {
    /// Merge-upsert the admin record with this projection
    Upsert(AdminProjection),
    /// Delete the admin record
    Delete,
    /// No store call at all
    Skip,
}

/// What the mirror did with an update notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    Upserted,
    Deleted,
    Skipped,
}

impl MirrorOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upserted => "upserted",
            Self::Deleted => "deleted",
            Self::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for MirrorOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide what to do with a (previous, new) snapshot pair
///
/// Pure function of the two snapshots:
/// - admin flag flipped on: upsert the new projection
/// - admin flag flipped off: delete
/// - still admin and a projected field changed: upsert
/// - anything else: skip
pub fn plan(previous: &UserSnapshot, new: &UserSnapshot) -> MirrorPlan {
    if new.is_admin != previous.is_admin {
        if new.is_admin {
            MirrorPlan::Upsert(new.projection())
        } else {
            MirrorPlan::Delete
        }
    } else if new.is_admin && new.projection() != previous.projection() {
        MirrorPlan::Upsert(new.projection())
    } else {
        MirrorPlan::Skip
    }
}

/// Mirror service keeping the admins collection in step with user records
///
/// One invocation per update notification; no state survives across
/// invocations, and each invocation issues at most one write or one delete
/// against the admins collection, never both. Re-applying the same pair
/// yields the same end state.
pub struct MirrorService {
    admin_store: Arc<AdminStore>,
}

impl MirrorService {
    /// Create MirrorService from AppData
    ///
    /// Extracts only the dependencies the mirror needs from the centralized
    /// AppData.
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            admin_store: app_data.admin_store.clone(),
        }
    }

    /// Apply one user-record change to the admins collection
    ///
    /// # Errors
    /// Returns `InternalError` when the store call fails. The failure is
    /// deliberately not caught here; the invoking platform owns redelivery.
    pub async fn apply_user_change(
        &self,
        user_id: &str,
        previous: &UserSnapshot,
        new: &UserSnapshot,
    ) -> Result<MirrorOutcome, InternalError> {
        match plan(previous, new) {
            MirrorPlan::Upsert(projection) => {
                self.admin_store.upsert_merge(user_id, &projection).await?;
                tracing::info!("Mirrored admin record for user {}", user_id);
                Ok(MirrorOutcome::Upserted)
            }
            MirrorPlan::Delete => {
                self.admin_store.delete(user_id).await?;
                tracing::info!("Removed admin record for user {}", user_id);
                Ok(MirrorOutcome::Deleted)
            }
            MirrorPlan::Skip => {
                tracing::debug!("No admin-relevant change for user {}", user_id);
                Ok(MirrorOutcome::Skipped)
            }
        }
    }
}

#[cfg(test)]
#[path = "mirror_service_tests.rs"]
mod mirror_service_tests;
