use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::payment::PaymentSortBy;
use crate::domain::types::{PaymentStatus, SortOrder};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<PaymentSortBy>,
    pub sort_order: Option<SortOrder>,
    pub user_id: Option<String>,
    pub property_id: Option<String>,
    pub status: Option<PaymentStatus>,
    #[validate(length(max = 50))]
    pub gateway: Option<String>,
}

#[cfg(feature = "data")]
impl PaymentFilterParams {
    pub fn into_query(self) -> crate::repository::PaymentListQuery {
        crate::repository::PaymentListQuery {
            user_id: self.user_id,
            property_id: self.property_id,
            status: self.status,
            gateway: self.gateway,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
