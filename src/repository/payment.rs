use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::payment::{NewPayment, Payment, PaymentSortBy, UpdatePayment};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, PaymentListQuery, PaymentReader, PaymentWriter, ordered,
};

fn filtered(
    query: &PaymentListQuery,
) -> crate::schema::payments::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::payments;

    let mut q = payments::table.into_boxed();

    if let Some(user_id) = &query.user_id {
        q = q.filter(payments::user_id.eq(user_id.clone()));
    }
    if let Some(property_id) = &query.property_id {
        q = q.filter(payments::property_id.eq(property_id.clone()));
    }
    if let Some(status) = query.status {
        q = q.filter(payments::status.eq(status.to_string()));
    }
    if let Some(gateway) = &query.gateway {
        q = q.filter(payments::gateway.eq(gateway.clone()));
    }

    q
}

impl PaymentReader for DieselRepository {
    fn get_payment_by_id(&self, id: &str) -> RepositoryResult<Option<Payment>> {
        use crate::models::payment::Payment as PaymentRow;
        use crate::schema::payments;

        let mut conn = self.conn()?;
        let row = payments::table
            .find(id)
            .first::<PaymentRow>(&mut conn)
            .optional()?;

        Ok(row.map(Payment::try_from).transpose()?)
    }

    fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)> {
        use crate::models::payment::Payment as PaymentRow;
        use crate::schema::payments;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                PaymentSortBy::CreatedAt => {
                    ordered!(page_query, query.sort_order, payments::created_at)
                }
                PaymentSortBy::UpdatedAt => {
                    ordered!(page_query, query.sort_order, payments::updated_at)
                }
                PaymentSortBy::Amount => ordered!(page_query, query.sort_order, payments::amount),
                PaymentSortBy::Status => ordered!(page_query, query.sort_order, payments::status),
            };
            let page_query = page_query.then_order_by(payments::id.asc());

            let items = page_query
                .load::<PaymentRow>(conn)?
                .into_iter()
                .map(Payment::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok((total as usize, items))
        })
    }
}

impl PaymentWriter for DieselRepository {
    fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment> {
        use crate::models::payment::{NewPayment as NewPaymentRow, Payment as PaymentRow};
        use crate::schema::payments;

        let mut conn = self.conn()?;
        let row = NewPaymentRow::from_domain(
            new_payment,
            Uuid::new_v4().to_string(),
            Utc::now().naive_utc(),
        );

        let inserted = diesel::insert_into(payments::table)
            .values(&row)
            .get_result::<PaymentRow>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_payment(
        &self,
        id: &str,
        updates: &UpdatePayment,
    ) -> RepositoryResult<Option<Payment>> {
        use crate::models::payment::{Payment as PaymentRow, UpdatePayment as Changes};
        use crate::schema::payments;

        let mut conn = self.conn()?;
        let changes = Changes::from_domain(updates, Utc::now().naive_utc());

        let updated = diesel::update(payments::table.find(id))
            .set(&changes)
            .get_result::<PaymentRow>(&mut conn)
            .optional()?;

        Ok(updated.map(Payment::try_from).transpose()?)
    }

    fn delete_payment(&self, id: &str) -> RepositoryResult<Option<Payment>> {
        use crate::models::payment::Payment as PaymentRow;
        use crate::schema::payments;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(payments::table.find(id))
            .get_result::<PaymentRow>(&mut conn)
            .optional()?;

        Ok(deleted.map(Payment::try_from).transpose()?)
    }
}
