//! Property listings: the core entity of the marketing site.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::{PropertyStatus, text_enum, validate_decimal};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Decimal carried as a string to preserve precision.
    pub price: String,
    pub status: PropertyStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub size: i32,
    pub bedrooms: i32,
    pub bathrooms: String,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for creating a property. Absent optional fields fall back to the
/// table defaults (`status = draft`, `country = USA`).
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub owner_id: String,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = validate_decimal))]
    pub price: String,
    pub status: Option<PropertyStatus>,
    pub address: String,
    #[validate(length(max = 100))]
    pub city: String,
    #[validate(length(max = 100))]
    pub state: String,
    #[validate(length(max = 20))]
    pub zip_code: String,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    pub size: i32,
    pub bedrooms: i32,
    #[validate(custom(function = validate_decimal))]
    pub bathrooms: String,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

/// Partial update: only present fields are written, everything else is left
/// untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProperty {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = validate_decimal))]
    pub price: Option<String>,
    pub status: Option<PropertyStatus>,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    #[validate(length(max = 20))]
    pub zip_code: Option<String>,
    #[validate(length(max = 100))]
    pub country: Option<String>,
    pub size: Option<i32>,
    pub bedrooms: Option<i32>,
    #[validate(custom(function = validate_decimal))]
    pub bathrooms: Option<String>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

text_enum!(
    /// Columns a property list may be sorted on.
    PropertySortBy,
    default: CreatedAt,
    {
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
        Price => "price",
        Title => "title",
        Size => "size",
        Bedrooms => "bedrooms",
    }
);
