use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::SortOrder;
use crate::domain::user::UserSortBy;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<UserSortBy>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
    pub role: Option<String>,
}

#[cfg(feature = "data")]
impl UserFilterParams {
    pub fn into_query(self) -> crate::repository::UserListQuery {
        crate::repository::UserListQuery {
            search: self.search,
            role: self.role,
            sort_by: self.sort_by.unwrap_or_default(),
            // The directory reads in ascending name order unless asked otherwise.
            sort_order: self.sort_order.unwrap_or(SortOrder::Asc),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
