use chrono::Utc;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Double};
use uuid::Uuid;

use crate::domain::property::{NewProperty, Property, PropertySortBy, UpdateProperty};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, PropertyListQuery, PropertyReader, PropertyWriter, ordered,
};

fn filtered(
    query: &PropertyListQuery,
) -> crate::schema::properties::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::properties;

    let mut q = properties::table.into_boxed();

    if let Some(search) = &query.search {
        let pattern = format!("%{search}%");
        q = q.filter(
            properties::title
                .like(pattern.clone())
                .or(properties::description.assume_not_null().like(pattern)),
        );
    }
    if let Some(status) = query.status {
        q = q.filter(properties::status.eq(status.to_string()));
    }
    if let Some(city) = &query.city {
        q = q.filter(properties::city.like(format!("%{city}%")));
    }
    // Prices are stored as decimal text; compare numerically.
    if let Some(min) = query.min_price {
        q = q.filter(sql::<Bool>("CAST(price AS REAL) >= ").bind::<Double, _>(min));
    }
    if let Some(max) = query.max_price {
        q = q.filter(sql::<Bool>("CAST(price AS REAL) <= ").bind::<Double, _>(max));
    }
    if let Some(bedrooms) = query.bedrooms {
        q = q.filter(properties::bedrooms.ge(bedrooms));
    }

    q
}

impl PropertyReader for DieselRepository {
    fn get_property_by_id(&self, id: &str) -> RepositoryResult<Option<Property>> {
        use crate::models::property::Property as PropertyRow;
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let row = properties::table
            .find(id)
            .first::<PropertyRow>(&mut conn)
            .optional()?;

        Ok(row.map(Property::try_from).transpose()?)
    }

    fn list_properties(
        &self,
        query: PropertyListQuery,
    ) -> RepositoryResult<(usize, Vec<Property>)> {
        use crate::models::property::Property as PropertyRow;
        use crate::schema::properties;

        let mut conn = self.conn()?;

        // Count and page fetch share one transaction so the total always
        // agrees with the returned rows.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                PropertySortBy::CreatedAt => {
                    ordered!(page_query, query.sort_order, properties::created_at)
                }
                PropertySortBy::UpdatedAt => {
                    ordered!(page_query, query.sort_order, properties::updated_at)
                }
                PropertySortBy::Price => ordered!(page_query, query.sort_order, properties::price),
                PropertySortBy::Title => ordered!(page_query, query.sort_order, properties::title),
                PropertySortBy::Size => ordered!(page_query, query.sort_order, properties::size),
                PropertySortBy::Bedrooms => {
                    ordered!(page_query, query.sort_order, properties::bedrooms)
                }
            };
            // Unique tiebreaker keeps the row order stable across pages when
            // the sort column has equal values.
            let page_query = page_query.then_order_by(properties::id.asc());

            let items = page_query
                .load::<PropertyRow>(conn)?
                .into_iter()
                .map(Property::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok((total as usize, items))
        })
    }
}

impl PropertyWriter for DieselRepository {
    fn create_property(&self, new_property: &NewProperty) -> RepositoryResult<Property> {
        use crate::models::property::{NewProperty as NewPropertyRow, Property as PropertyRow};
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let row = NewPropertyRow::from_domain(
            new_property,
            Uuid::new_v4().to_string(),
            Utc::now().naive_utc(),
        );

        let inserted = diesel::insert_into(properties::table)
            .values(&row)
            .get_result::<PropertyRow>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_property(
        &self,
        id: &str,
        updates: &UpdateProperty,
    ) -> RepositoryResult<Option<Property>> {
        use crate::models::property::{Property as PropertyRow, UpdateProperty as Changes};
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let changes = Changes::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(properties::table.find(id))
            .set(&changes)
            .get_result::<PropertyRow>(&mut conn)
            .optional()?;

        Ok(updated.map(Property::try_from).transpose()?)
    }

    fn delete_property(&self, id: &str) -> RepositoryResult<Option<Property>> {
        use crate::models::property::Property as PropertyRow;
        use crate::schema::properties;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(properties::table.find(id))
            .get_result::<PropertyRow>(&mut conn)
            .optional()?;

        Ok(deleted.map(Property::try_from).transpose()?)
    }
}
