use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::landlord::{
    LandlordProfile as DomainLandlordProfile, NewLandlordProfile as DomainNewLandlordProfile,
    UpdateLandlordProfile as DomainUpdateLandlordProfile,
};
use crate::domain::types::TypeConstraintError;
use crate::models::{decode_string_list, encode_string_list};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::landlord_profiles)]
/// Diesel row for [`crate::domain::landlord::LandlordProfile`].
pub struct LandlordProfile {
    pub id: String,
    pub user_id: String,
    pub verification_status: String,
    pub verification_documents: Option<String>,
    pub bio: Option<String>,
    pub rating: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::landlord_profiles)]
pub struct NewLandlordProfile {
    pub id: String,
    pub user_id: String,
    pub verification_status: String,
    pub verification_documents: Option<String>,
    pub bio: Option<String>,
    pub rating: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewLandlordProfile {
    pub fn from_domain(new: &DomainNewLandlordProfile, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: new.user_id.clone(),
            verification_status: crate::domain::types::VerificationStatus::default().to_string(),
            verification_documents: encode_string_list(new.verification_documents.as_ref()),
            bio: new.bio.clone(),
            rating: "0.00".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::landlord_profiles)]
pub struct UpdateLandlordProfile {
    pub verification_status: Option<String>,
    pub verification_documents: Option<String>,
    pub bio: Option<String>,
    pub rating: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateLandlordProfile {
    pub fn from_domain(updates: &DomainUpdateLandlordProfile, now: NaiveDateTime) -> Self {
        Self {
            verification_status: updates.verification_status.map(|s| s.to_string()),
            verification_documents: encode_string_list(updates.verification_documents.as_ref()),
            bio: updates.bio.clone(),
            rating: updates.rating.clone(),
            updated_at: now,
        }
    }
}

impl TryFrom<LandlordProfile> for DomainLandlordProfile {
    type Error = TypeConstraintError;

    fn try_from(row: LandlordProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            verification_status: row.verification_status.parse()?,
            verification_documents: decode_string_list(row.verification_documents),
            bio: row.bio,
            rating: row.rating,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
