use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};

use crate::services::MirrorService;
use crate::types::dto::hooks::{SyncAck, UserChangeRequest};
use crate::types::internal::snapshot::UserSnapshot;

/// Change-notification webhook endpoints
///
/// The host platform delivers one POST per update to a user record, carrying
/// the prior and new snapshots. Creation events carry no prior snapshot and
/// are not delivered here.
pub struct HooksApi {
    mirror_service: Arc<MirrorService>,
}

impl HooksApi {
    /// Create a new HooksApi with the given MirrorService
    pub fn new(mirror_service: Arc<MirrorService>) -> Self {
        Self { mirror_service }
    }
}

/// API tags for webhook endpoints
#[derive(Tags)]
enum HooksTags {
    /// User change notifications
    Hooks,
}

#[derive(ApiResponse)]
enum SyncResponse {
    /// Change processed; at most one store operation was issued
    #[oai(status = 200)]
    Ok(Json<SyncAck>),
    /// The write or delete against the admins collection failed; the
    /// platform should redeliver the event
    #[oai(status = 500)]
    WriteFailure,
}

#[OpenApi]
impl HooksApi {
    /// Update notification for users/{user_id}
    ///
    /// Mirrors the isAdmin flag of the user record into the admins
    /// collection. Snapshots are accepted as-is; unknown fields are ignored
    /// and missing fields flow through as absent.
    #[oai(path = "/hooks/users/:user_id", method = "post", tag = "HooksTags::Hooks")]
    async fn user_updated(
        &self,
        user_id: Path<String>,
        body: Json<UserChangeRequest>,
    ) -> SyncResponse {
        let previous = UserSnapshot::from_value(&body.before.0);
        let new = UserSnapshot::from_value(&body.after.0);

        match self
            .mirror_service
            .apply_user_change(&user_id.0, &previous, &new)
            .await
        {
            Ok(outcome) => SyncResponse::Ok(Json(SyncAck {
                action: outcome.to_string(),
            })),
            Err(e) => {
                tracing::error!("Failed to sync admin record for user {}: {}", user_id.0, e);
                SyncResponse::WriteFailure
            }
        }
    }
}
