use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::notification::NotificationSortBy;
use crate::domain::types::SortOrder;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<NotificationSortBy>,
    pub sort_order: Option<SortOrder>,
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub kind: Option<String>,
    pub read: Option<bool>,
}

#[cfg(feature = "data")]
impl NotificationFilterParams {
    pub fn into_query(self) -> crate::repository::NotificationListQuery {
        crate::repository::NotificationListQuery {
            user_id: self.user_id,
            kind: self.kind,
            read: self.read,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
