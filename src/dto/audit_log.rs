use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::audit_log::AuditLogSortBy;
use crate::domain::types::SortOrder;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<AuditLogSortBy>,
    pub sort_order: Option<SortOrder>,
    pub user_id: Option<String>,
    #[validate(length(max = 100))]
    pub action: Option<String>,
    #[validate(length(max = 50))]
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
}

#[cfg(feature = "data")]
impl AuditLogFilterParams {
    pub fn into_query(self) -> crate::repository::AuditLogListQuery {
        crate::repository::AuditLogListQuery {
            user_id: self.user_id,
            action: self.action,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
