use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::property::PropertySortBy;
use crate::domain::types::{PropertyStatus, SortOrder};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFilterParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
    pub sort_by: Option<PropertySortBy>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
    pub status: Option<PropertyStatus>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[validate(range(min = 0))]
    pub bedrooms: Option<i32>,
}

#[cfg(feature = "data")]
impl PropertyFilterParams {
    pub fn into_query(self) -> crate::repository::PropertyListQuery {
        crate::repository::PropertyListQuery {
            search: self.search,
            status: self.status,
            city: self.city,
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: crate::pagination::Page::new(self.limit, self.offset),
        }
    }
}
