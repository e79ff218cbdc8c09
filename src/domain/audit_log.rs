//! Audit trail records. Append-only: once written, a record is never
//! updated or deleted anywhere in the stack.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::types::text_enum;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    /// None marks a system-generated event.
    pub user_id: Option<String>,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub details: Option<Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAuditLog {
    pub user_id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub action: String,
    #[validate(length(max = 50))]
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub details: Option<Value>,
    #[validate(length(max = 45))]
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

text_enum!(
    /// Columns an audit log list may be sorted on.
    AuditLogSortBy,
    default: CreatedAt,
    {
        CreatedAt => "createdAt",
        Action => "action",
        EntityType => "entityType",
    }
);
