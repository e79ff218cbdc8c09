use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::User as DomainUser;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel row for [`crate::domain::user::User`]. The directory is read-only
/// from this API; rows are written by the external auth service.
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl From<User> for DomainUser {
    fn from(row: User) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
        }
    }
}
