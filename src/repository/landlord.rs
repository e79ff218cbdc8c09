use chrono::Utc;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Double};
use uuid::Uuid;

use crate::domain::landlord::{
    LandlordProfile, LandlordSortBy, NewLandlordProfile, UpdateLandlordProfile,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, LandlordListQuery, LandlordReader, LandlordWriter, ordered,
};

fn filtered(
    query: &LandlordListQuery,
) -> crate::schema::landlord_profiles::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::landlord_profiles;

    let mut q = landlord_profiles::table.into_boxed();

    if let Some(user_id) = &query.user_id {
        q = q.filter(landlord_profiles::user_id.eq(user_id.clone()));
    }
    if let Some(status) = query.verification_status {
        q = q.filter(landlord_profiles::verification_status.eq(status.to_string()));
    }
    // Ratings are stored as decimal text; compare numerically.
    if let Some(min) = query.min_rating {
        q = q.filter(sql::<Bool>("CAST(rating AS REAL) >= ").bind::<Double, _>(min));
    }

    q
}

impl LandlordReader for DieselRepository {
    fn get_landlord_by_id(&self, id: &str) -> RepositoryResult<Option<LandlordProfile>> {
        use crate::models::landlord::LandlordProfile as LandlordRow;
        use crate::schema::landlord_profiles;

        let mut conn = self.conn()?;
        let row = landlord_profiles::table
            .find(id)
            .first::<LandlordRow>(&mut conn)
            .optional()?;

        Ok(row.map(LandlordProfile::try_from).transpose()?)
    }

    fn list_landlords(
        &self,
        query: LandlordListQuery,
    ) -> RepositoryResult<(usize, Vec<LandlordProfile>)> {
        use crate::models::landlord::LandlordProfile as LandlordRow;
        use crate::schema::landlord_profiles;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                LandlordSortBy::CreatedAt => {
                    ordered!(page_query, query.sort_order, landlord_profiles::created_at)
                }
                LandlordSortBy::UpdatedAt => {
                    ordered!(page_query, query.sort_order, landlord_profiles::updated_at)
                }
                LandlordSortBy::Rating => {
                    ordered!(page_query, query.sort_order, landlord_profiles::rating)
                }
                LandlordSortBy::VerificationStatus => ordered!(
                    page_query,
                    query.sort_order,
                    landlord_profiles::verification_status
                ),
            };
            let page_query = page_query.then_order_by(landlord_profiles::id.asc());

            let items = page_query
                .load::<LandlordRow>(conn)?
                .into_iter()
                .map(LandlordProfile::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok((total as usize, items))
        })
    }
}

impl LandlordWriter for DieselRepository {
    fn create_landlord(
        &self,
        new_landlord: &NewLandlordProfile,
    ) -> RepositoryResult<LandlordProfile> {
        use crate::models::landlord::{
            LandlordProfile as LandlordRow, NewLandlordProfile as NewLandlordRow,
        };
        use crate::schema::landlord_profiles;

        let mut conn = self.conn()?;
        let row = NewLandlordRow::from_domain(
            new_landlord,
            Uuid::new_v4().to_string(),
            Utc::now().naive_utc(),
        );

        let inserted = diesel::insert_into(landlord_profiles::table)
            .values(&row)
            .get_result::<LandlordRow>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_landlord(
        &self,
        id: &str,
        updates: &UpdateLandlordProfile,
    ) -> RepositoryResult<Option<LandlordProfile>> {
        use crate::models::landlord::{LandlordProfile as LandlordRow, UpdateLandlordProfile as Changes};
        use crate::schema::landlord_profiles;

        let mut conn = self.conn()?;
        let changes = Changes::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(landlord_profiles::table.find(id))
            .set(&changes)
            .get_result::<LandlordRow>(&mut conn)
            .optional()?;

        Ok(updated.map(LandlordProfile::try_from).transpose()?)
    }

    fn delete_landlord(&self, id: &str) -> RepositoryResult<Option<LandlordProfile>> {
        use crate::models::landlord::LandlordProfile as LandlordRow;
        use crate::schema::landlord_profiles;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(landlord_profiles::table.find(id))
            .get_result::<LandlordRow>(&mut conn)
            .optional()?;

        Ok(deleted.map(LandlordProfile::try_from).transpose()?)
    }
}
