use serde_json::Value;

/// Point-in-time copy of a user record's consumed fields
///
/// The inbound notification carries arbitrary key-value snapshots; only the
/// fields the mirror cares about are extracted here. `isAdmin` is
/// boolean-like on the source, so it is coerced with explicit truthiness
/// rules rather than requiring a JSON boolean: `false`, `null`, `0`, `""`
/// and a missing field all count as "not admin", anything else counts as
/// admin. `is_mentor` gets the same coercion when present.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSnapshot {
    pub is_admin: bool,
    pub email: Option<String>,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub full_name: Option<String>,
    pub is_mentor: Option<bool>,
}

impl UserSnapshot {
    /// Extract the consumed fields from an arbitrary JSON snapshot
    ///
    /// Missing fields become `None` and flow through to the projection as
    /// absent; they are never rejected. String fields holding a non-string
    /// JSON value are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            is_admin: value.get("isAdmin").map(truthy).unwrap_or(false),
            email: string_field(value, "email"),
            school_id: string_field(value, "school_id"),
            school_name: string_field(value, "school_name"),
            full_name: string_field(value, "full_name"),
            is_mentor: value.get("is_mentor").map(truthy),
        }
    }

    /// The subset of fields mirrored into the admins collection
    pub fn projection(&self) -> AdminProjection {
        AdminProjection {
            email: self.email.clone(),
            school_id: self.school_id.clone(),
            school_name: self.school_name.clone(),
            full_name: self.full_name.clone(),
            is_mentor: self.is_mentor,
        }
    }
}

/// The fields written to an admin record on upsert
///
/// Derived `PartialEq` is the change detector: two snapshots need a write
/// only when their projections differ.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminProjection {
    pub email: Option<String>,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub full_name: Option<String>,
    pub is_mentor: Option<bool>,
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}
