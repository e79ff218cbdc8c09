//! Property tour scheduling.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::{TourStatus, text_enum};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub property_id: String,
    /// Agent assignment is optional.
    pub agent_id: Option<String>,
    pub buyer_id: String,
    pub date: NaiveDateTime,
    pub status: TourStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTour {
    pub property_id: String,
    pub buyer_id: String,
    pub agent_id: Option<String>,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTour {
    pub status: Option<TourStatus>,
    pub agent_id: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

text_enum!(
    /// Columns a tour list may be sorted on.
    TourSortBy,
    default: CreatedAt,
    {
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
        Date => "date",
        Status => "status",
    }
);
