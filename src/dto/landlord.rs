use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::landlord::LandlordSortBy;
use crate::domain::types::{SortOrder, VerificationStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LandlordFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<LandlordSortBy>,
    pub sort_order: Option<SortOrder>,
    pub user_id: Option<String>,
    pub verification_status: Option<VerificationStatus>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub min_rating: Option<f64>,
}

#[cfg(feature = "data")]
impl LandlordFilterParams {
    pub fn into_query(self) -> crate::repository::LandlordListQuery {
        crate::repository::LandlordListQuery {
            user_id: self.user_id,
            verification_status: self.verification_status,
            min_rating: self.min_rating,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
