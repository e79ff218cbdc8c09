use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::property::{
    NewProperty as DomainNewProperty, Property as DomainProperty,
    UpdateProperty as DomainUpdateProperty,
};
use crate::domain::types::TypeConstraintError;
use crate::models::{decode_string_list, encode_string_list};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::properties)]
/// Diesel row for [`crate::domain::property::Property`].
pub struct Property {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: String,
    pub status: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub size: i32,
    pub bedrooms: i32,
    pub bathrooms: String,
    pub features: Option<String>,
    pub images: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::properties)]
/// Insertable form of [`Property`] with server-assigned id and timestamps.
pub struct NewProperty {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: String,
    pub status: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub size: i32,
    pub bedrooms: i32,
    pub bathrooms: String,
    pub features: Option<String>,
    pub images: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProperty {
    pub fn from_domain(new: &DomainNewProperty, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            owner_id: new.owner_id.clone(),
            title: new.title.clone(),
            description: new.description.clone(),
            price: new.price.clone(),
            status: new.status.unwrap_or_default().to_string(),
            address: new.address.clone(),
            city: new.city.clone(),
            state: new.state.clone(),
            zip_code: new.zip_code.clone(),
            country: new.country.clone().unwrap_or_else(|| "USA".to_string()),
            size: new.size,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms.clone(),
            features: encode_string_list(new.features.as_ref()),
            images: encode_string_list(new.images.as_ref()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::properties)]
/// Changeset applying only the fields present in the patch; `updated_at` is
/// always written.
pub struct UpdateProperty {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub size: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<String>,
    pub features: Option<String>,
    pub images: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateProperty {
    pub fn from_domain(updates: &DomainUpdateProperty, now: NaiveDateTime) -> Self {
        Self {
            title: updates.title.clone(),
            description: updates.description.clone(),
            price: updates.price.clone(),
            status: updates.status.map(|s| s.to_string()),
            address: updates.address.clone(),
            city: updates.city.clone(),
            state: updates.state.clone(),
            zip_code: updates.zip_code.clone(),
            country: updates.country.clone(),
            size: updates.size,
            bedrooms: updates.bedrooms,
            bathrooms: updates.bathrooms.clone(),
            features: encode_string_list(updates.features.as_ref()),
            images: encode_string_list(updates.images.as_ref()),
            updated_at: now,
        }
    }
}

impl TryFrom<Property> for DomainProperty {
    type Error = TypeConstraintError;

    fn try_from(row: Property) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description,
            price: row.price,
            status: row.status.parse()?,
            address: row.address,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            country: row.country,
            size: row.size,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            features: decode_string_list(row.features),
            images: decode_string_list(row.images),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::PropertyStatus;

    fn sample_new() -> DomainNewProperty {
        DomainNewProperty {
            owner_id: "u1".to_string(),
            title: "Test House".to_string(),
            description: None,
            price: "100000".to_string(),
            status: None,
            address: "1 Main St".to_string(),
            city: "X".to_string(),
            state: "Y".to_string(),
            zip_code: "00000".to_string(),
            country: None,
            size: 100,
            bedrooms: 2,
            bathrooms: "1".to_string(),
            features: Some(vec!["pool".to_string(), "garage".to_string()]),
            images: None,
        }
    }

    #[test]
    fn insertable_applies_defaults() {
        let now = Utc::now().naive_utc();
        let row = NewProperty::from_domain(&sample_new(), "p1".to_string(), now);
        assert_eq!(row.status, "draft");
        assert_eq!(row.country, "USA");
        assert_eq!(row.features.as_deref(), Some(r#"["pool","garage"]"#));
        assert_eq!(row.created_at, row.updated_at);
    }

    #[test]
    fn row_converts_to_domain() {
        let now = Utc::now().naive_utc();
        let row = Property {
            id: "p1".to_string(),
            owner_id: "u1".to_string(),
            title: "t".to_string(),
            description: None,
            price: "1".to_string(),
            status: "published".to_string(),
            address: "a".to_string(),
            city: "c".to_string(),
            state: "s".to_string(),
            zip_code: "z".to_string(),
            country: "USA".to_string(),
            size: 10,
            bedrooms: 1,
            bathrooms: "1".to_string(),
            features: Some(r#"["pool"]"#.to_string()),
            images: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainProperty = row.try_into().unwrap();
        assert_eq!(domain.status, PropertyStatus::Published);
        assert_eq!(domain.features, Some(vec!["pool".to_string()]));
    }

    #[test]
    fn unknown_stored_status_fails_conversion() {
        let now = Utc::now().naive_utc();
        let row = Property {
            id: "p1".to_string(),
            owner_id: "u1".to_string(),
            title: "t".to_string(),
            description: None,
            price: "1".to_string(),
            status: "for_sale".to_string(),
            address: "a".to_string(),
            city: "c".to_string(),
            state: "s".to_string(),
            zip_code: "z".to_string(),
            country: "USA".to_string(),
            size: 10,
            bedrooms: 1,
            bathrooms: "1".to_string(),
            features: None,
            images: None,
            created_at: now,
            updated_at: now,
        };
        assert!(DomainProperty::try_from(row).is_err());
    }
}
