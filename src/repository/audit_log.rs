//! Audit log persistence. Deliberately exposes no update or delete path;
//! the audit trail stays append-only all the way down.

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::audit_log::{AuditLog, AuditLogSortBy, NewAuditLog};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AuditLogListQuery, AuditLogReader, AuditLogWriter, DieselRepository, ordered,
};

fn filtered(
    query: &AuditLogListQuery,
) -> crate::schema::audit_logs::BoxedQuery<'static, diesel::sqlite::Sqlite> {
    use crate::schema::audit_logs;

    let mut q = audit_logs::table.into_boxed();

    if let Some(user_id) = &query.user_id {
        q = q.filter(audit_logs::user_id.eq(user_id.clone()));
    }
    if let Some(action) = &query.action {
        q = q.filter(audit_logs::action.eq(action.clone()));
    }
    if let Some(entity_type) = &query.entity_type {
        q = q.filter(audit_logs::entity_type.eq(entity_type.clone()));
    }
    if let Some(entity_id) = &query.entity_id {
        q = q.filter(audit_logs::entity_id.eq(entity_id.clone()));
    }

    q
}

impl AuditLogReader for DieselRepository {
    fn get_audit_log_by_id(&self, id: &str) -> RepositoryResult<Option<AuditLog>> {
        use crate::models::audit_log::AuditLog as AuditLogRow;
        use crate::schema::audit_logs;

        let mut conn = self.conn()?;
        let row = audit_logs::table
            .find(id)
            .first::<AuditLogRow>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_audit_logs(
        &self,
        query: AuditLogListQuery,
    ) -> RepositoryResult<(usize, Vec<AuditLog>)> {
        use crate::models::audit_log::AuditLog as AuditLogRow;
        use crate::schema::audit_logs;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total: i64 = filtered(&query).count().get_result(conn)?;

            let mut page_query = filtered(&query)
                .limit(query.page.limit)
                .offset(query.page.offset);
            page_query = match query.sort_by {
                AuditLogSortBy::CreatedAt => {
                    ordered!(page_query, query.sort_order, audit_logs::created_at)
                }
                AuditLogSortBy::Action => {
                    ordered!(page_query, query.sort_order, audit_logs::action)
                }
                AuditLogSortBy::EntityType => {
                    ordered!(page_query, query.sort_order, audit_logs::entity_type)
                }
            };
            let page_query = page_query.then_order_by(audit_logs::id.asc());

            let items = page_query
                .load::<AuditLogRow>(conn)?
                .into_iter()
                .map(Into::into)
                .collect();

            Ok((total as usize, items))
        })
    }
}

impl AuditLogWriter for DieselRepository {
    fn create_audit_log(&self, new_audit_log: &NewAuditLog) -> RepositoryResult<AuditLog> {
        use crate::models::audit_log::{AuditLog as AuditLogRow, NewAuditLog as NewAuditLogRow};
        use crate::schema::audit_logs;

        let mut conn = self.conn()?;
        let row = NewAuditLogRow::from_domain(
            new_audit_log,
            Uuid::new_v4().to_string(),
            Utc::now().naive_utc(),
        );

        let inserted = diesel::insert_into(audit_logs::table)
            .values(&row)
            .get_result::<AuditLogRow>(&mut conn)?;

        Ok(inserted.into())
    }
}
