//! User notifications. Creation time is immutable; only the read flag
//! changes after insert.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::types::text_enum;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    /// Category string, e.g. "tour_confirmed" or "payment_received".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Optional link back to the entity that triggered the notification.
    pub data: Option<Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub kind: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub message: String,
    pub data: Option<Value>,
}

text_enum!(
    /// Columns a notification list may be sorted on.
    NotificationSortBy,
    default: CreatedAt,
    {
        CreatedAt => "createdAt",
        Type => "type",
        Read => "read",
    }
);
