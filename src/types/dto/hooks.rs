use poem_openapi::{types::Any, Object};
use serde_json::Value;

/// Update notification for a user record
///
/// Both snapshots are arbitrary key-value data; the mirror extracts only the
/// fields it consumes and ignores the rest.
#[derive(Debug, Object)]
pub struct UserChangeRequest {
    /// Full snapshot of the record before the change
    pub before: Any<Value>,
    /// Full snapshot of the record after the change
    pub after: Any<Value>,
}

/// Acknowledgement of a processed update notification
#[derive(Debug, Object)]
pub struct SyncAck {
    /// Action taken against the admins collection: "upserted", "deleted" or
    /// "skipped"
    pub action: String,
}
