//! Landlord profiles, 1:1 with a user account.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::{VerificationStatus, text_enum, validate_decimal};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandlordProfile {
    pub id: String,
    pub user_id: String,
    pub verification_status: VerificationStatus,
    /// URLs of uploaded verification documents.
    pub verification_documents: Option<Vec<String>>,
    pub bio: Option<String>,
    pub rating: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLandlordProfile {
    pub user_id: String,
    pub bio: Option<String>,
    pub verification_documents: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateLandlordProfile {
    pub verification_status: Option<VerificationStatus>,
    pub verification_documents: Option<Vec<String>>,
    pub bio: Option<String>,
    #[validate(custom(function = validate_decimal))]
    pub rating: Option<String>,
}

text_enum!(
    /// Columns a landlord list may be sorted on.
    LandlordSortBy,
    default: CreatedAt,
    {
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
        Rating => "rating",
        VerificationStatus => "verificationStatus",
    }
);
