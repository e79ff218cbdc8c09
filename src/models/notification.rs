use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::notification::{
    NewNotification as DomainNewNotification, Notification as DomainNotification,
};
use crate::models::{decode_value, encode_value};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::notifications)]
/// Diesel row for [`crate::domain::notification::Notification`].
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub data: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notifications)]
pub struct NewNotification {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub data: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewNotification {
    pub fn from_domain(new: &DomainNewNotification, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: new.user_id.clone(),
            kind: new.kind.clone(),
            title: new.title.clone(),
            message: new.message.clone(),
            read: false,
            data: encode_value(new.data.as_ref()),
            created_at: now,
        }
    }
}

impl From<Notification> for DomainNotification {
    fn from(row: Notification) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            kind: row.kind,
            title: row.title,
            message: row.message,
            read: row.read,
            data: decode_value(row.data),
            created_at: row.created_at,
        }
    }
}
