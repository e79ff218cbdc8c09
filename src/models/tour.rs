use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tour::{
    NewTour as DomainNewTour, Tour as DomainTour, UpdateTour as DomainUpdateTour,
};
use crate::domain::types::{TourStatus, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tours)]
/// Diesel row for [`crate::domain::tour::Tour`].
pub struct Tour {
    pub id: String,
    pub property_id: String,
    pub agent_id: Option<String>,
    pub buyer_id: String,
    pub date: NaiveDateTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tours)]
pub struct NewTour {
    pub id: String,
    pub property_id: String,
    pub agent_id: Option<String>,
    pub buyer_id: String,
    pub date: NaiveDateTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewTour {
    pub fn from_domain(new: &DomainNewTour, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            property_id: new.property_id.clone(),
            agent_id: new.agent_id.clone(),
            buyer_id: new.buyer_id.clone(),
            date: new.date,
            status: TourStatus::default().to_string(),
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tours)]
pub struct UpdateTour {
    pub status: Option<String>,
    pub agent_id: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateTour {
    pub fn from_domain(updates: &DomainUpdateTour, now: NaiveDateTime) -> Self {
        Self {
            status: updates.status.map(|s| s.to_string()),
            agent_id: updates.agent_id.clone(),
            date: updates.date,
            notes: updates.notes.clone(),
            updated_at: now,
        }
    }
}

impl TryFrom<Tour> for DomainTour {
    type Error = TypeConstraintError;

    fn try_from(row: Tour) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            property_id: row.property_id,
            agent_id: row.agent_id,
            buyer_id: row.buyer_id,
            date: row.date,
            status: row.status.parse()?,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
