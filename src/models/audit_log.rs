use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::audit_log::{AuditLog as DomainAuditLog, NewAuditLog as DomainNewAuditLog};
use crate::models::{decode_value, encode_value};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::audit_logs)]
/// Diesel row for [`crate::domain::audit_log::AuditLog`]. There is no
/// changeset type: audit records are append-only.
pub struct AuditLog {
    pub id: String,
    pub user_id: Option<String>,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::audit_logs)]
pub struct NewAuditLog {
    pub id: String,
    pub user_id: Option<String>,
    pub action: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewAuditLog {
    pub fn from_domain(new: &DomainNewAuditLog, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: new.user_id.clone(),
            action: new.action.clone(),
            entity_type: new.entity_type.clone(),
            entity_id: new.entity_id.clone(),
            details: encode_value(new.details.as_ref()),
            ip_address: new.ip_address.clone(),
            user_agent: new.user_agent.clone(),
            created_at: now,
        }
    }
}

impl From<AuditLog> for DomainAuditLog {
    fn from(row: AuditLog) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            action: row.action,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            details: decode_value(row.details),
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            created_at: row.created_at,
        }
    }
}
