//! Read-only view of the user directory. Accounts are owned by the external
//! auth service; this API only lists and resolves them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::text_enum;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

text_enum!(
    /// Columns a user list may be sorted on.
    UserSortBy,
    default: Name,
    {
        Name => "name",
        Email => "email",
        CreatedAt => "createdAt",
    }
);
