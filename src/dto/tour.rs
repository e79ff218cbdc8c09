use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::tour::TourSortBy;
use crate::domain::types::{SortOrder, TourStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TourFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<TourSortBy>,
    pub sort_order: Option<SortOrder>,
    pub status: Option<TourStatus>,
    pub property_id: Option<String>,
    pub buyer_id: Option<String>,
    pub agent_id: Option<String>,
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
}

#[cfg(feature = "data")]
impl TourFilterParams {
    pub fn into_query(self) -> crate::repository::TourListQuery {
        crate::repository::TourListQuery {
            status: self.status,
            property_id: self.property_id,
            buyer_id: self.buyer_id,
            agent_id: self.agent_id,
            date_from: self.date_from,
            date_to: self.date_to,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
