use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::tour::{NewTour, Tour, TourSortBy, UpdateTour};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TourListQuery, TourReader, TourWriter, ordered};

fn filtered(
    query: &TourListQuery,
) -> crate::schema::tours::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::tours;

    let mut q = tours::table.into_boxed();

    if let Some(status) = query.status {
        q = q.filter(tours::status.eq(status.to_string()));
    }
    if let Some(property_id) = &query.property_id {
        q = q.filter(tours::property_id.eq(property_id.clone()));
    }
    if let Some(buyer_id) = &query.buyer_id {
        q = q.filter(tours::buyer_id.eq(buyer_id.clone()));
    }
    if let Some(agent_id) = &query.agent_id {
        q = q.filter(tours::agent_id.eq(agent_id.clone()));
    }
    if let Some(from) = query.date_from {
        q = q.filter(tours::date.ge(from));
    }
    if let Some(to) = query.date_to {
        q = q.filter(tours::date.le(to));
    }

    q
}

impl TourReader for DieselRepository {
    fn get_tour_by_id(&self, id: &str) -> RepositoryResult<Option<Tour>> {
        use crate::models::tour::Tour as TourRow;
        use crate::schema::tours;

        let mut conn = self.conn()?;
        let row = tours::table.find(id).first::<TourRow>(&mut conn).optional()?;

        Ok(row.map(Tour::try_from).transpose()?)
    }

    fn list_tours(&self, query: TourListQuery) -> RepositoryResult<(usize, Vec<Tour>)> {
        use crate::models::tour::Tour as TourRow;
        use crate::schema::tours;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                TourSortBy::CreatedAt => ordered!(page_query, query.sort_order, tours::created_at),
                TourSortBy::UpdatedAt => ordered!(page_query, query.sort_order, tours::updated_at),
                TourSortBy::Date => ordered!(page_query, query.sort_order, tours::date),
                TourSortBy::Status => ordered!(page_query, query.sort_order, tours::status),
            };
            let page_query = page_query.then_order_by(tours::id.asc());

            let items = page_query
                .load::<TourRow>(conn)?
                .into_iter()
                .map(Tour::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok((total as usize, items))
        })
    }
}

impl TourWriter for DieselRepository {
    fn create_tour(&self, new_tour: &NewTour) -> RepositoryResult<Tour> {
        use crate::models::tour::{NewTour as NewTourRow, Tour as TourRow};
        use crate::schema::tours;

        let mut conn = self.conn()?;
        let row =
            NewTourRow::from_domain(new_tour, Uuid::new_v4().to_string(), Utc::now().naive_utc());

        let inserted = diesel::insert_into(tours::table)
            .values(&row)
            .get_result::<TourRow>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_tour(&self, id: &str, updates: &UpdateTour) -> RepositoryResult<Option<Tour>> {
        use crate::models::tour::{Tour as TourRow, UpdateTour as Changes};
        use crate::schema::tours;

        let mut conn = self.conn()?;
        let changes = Changes::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(tours::table.find(id))
            .set(&changes)
            .get_result::<TourRow>(&mut conn)
            .optional()?;

        Ok(updated.map(Tour::try_from).transpose()?)
    }

    fn delete_tour(&self, id: &str) -> RepositoryResult<Option<Tour>> {
        use crate::models::tour::Tour as TourRow;
        use crate::schema::tours;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(tours::table.find(id))
            .get_result::<TourRow>(&mut conn)
            .optional()?;

        Ok(deleted.map(Tour::try_from).transpose()?)
    }
}
