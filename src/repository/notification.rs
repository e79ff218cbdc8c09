use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::notification::{NewNotification, Notification, NotificationSortBy};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, NotificationListQuery, NotificationReader, NotificationWriter, ordered,
};

fn filtered(
    query: &NotificationListQuery,
) -> crate::schema::notifications::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::notifications;

    let mut q = notifications::table.into_boxed();

    if let Some(user_id) = &query.user_id {
        q = q.filter(notifications::user_id.eq(user_id.clone()));
    }
    if let Some(kind) = &query.kind {
        q = q.filter(notifications::kind.eq(kind.clone()));
    }
    if let Some(read) = query.read {
        q = q.filter(notifications::read.eq(read));
    }

    q
}

impl NotificationReader for DieselRepository {
    fn get_notification_by_id(&self, id: &str) -> RepositoryResult<Option<Notification>> {
        use crate::models::notification::Notification as NotificationRow;
        use crate::schema::notifications;

        let mut conn = self.conn()?;
        let row = notifications::table
            .find(id)
            .first::<NotificationRow>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_notifications(
        &self,
        query: NotificationListQuery,
    ) -> RepositoryResult<(usize, Vec<Notification>)> {
        use crate::models::notification::Notification as NotificationRow;
        use crate::schema::notifications;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                NotificationSortBy::CreatedAt => {
                    ordered!(page_query, query.sort_order, notifications::created_at)
                }
                NotificationSortBy::Type => {
                    ordered!(page_query, query.sort_order, notifications::kind)
                }
                NotificationSortBy::Read => {
                    ordered!(page_query, query.sort_order, notifications::read)
                }
            };
            let page_query = page_query.then_order_by(notifications::id.asc());

            let items = page_query
                .load::<NotificationRow>(conn)?
                .into_iter()
                .map(Into::into)
                .collect();

            Ok((total as usize, items))
        })
    }
}

impl NotificationWriter for DieselRepository {
    fn create_notification(
        &self,
        new_notification: &NewNotification,
    ) -> RepositoryResult<Notification> {
        use crate::models::notification::{
            NewNotification as NewNotificationRow, Notification as NotificationRow,
        };
        use crate::schema::notifications;

        let mut conn = self.conn()?;
        let row = NewNotificationRow::from_domain(
            new_notification,
            Uuid::new_v4().to_string(),
            Utc::now().naive_utc(),
        );

        let inserted = diesel::insert_into(notifications::table)
            .values(&row)
            .get_result::<NotificationRow>(&mut conn)?;

        Ok(inserted.into())
    }

    fn set_notification_read(
        &self,
        id: &str,
        read: bool,
    ) -> RepositoryResult<Option<Notification>> {
        use crate::models::notification::Notification as NotificationRow;
        use crate::schema::notifications;

        let mut conn = self.conn()?;
        let updated = diesel::update(notifications::table.find(id))
            .set(notifications::read.eq(read))
            .get_result::<NotificationRow>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete_notification(&self, id: &str) -> RepositoryResult<Option<Notification>> {
        use crate::models::notification::Notification as NotificationRow;
        use crate::schema::notifications;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(notifications::table.find(id))
            .get_result::<NotificationRow>(&mut conn)
            .optional()?;

        Ok(deleted.map(Into::into))
    }
}
