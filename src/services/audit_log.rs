//! Audit records are append-only. There is no update or delete here, and
//! none is exposed anywhere else either.

use crate::domain::audit_log::{AuditLog, NewAuditLog};
use crate::pagination::Paginated;
use crate::repository::{AuditLogListQuery, AuditLogReader, AuditLogWriter};
use crate::services::ServiceResult;

pub fn list_audit_logs<R>(repo: &R, query: AuditLogListQuery) -> ServiceResult<Paginated<AuditLog>>
where
    R: AuditLogReader + ?Sized,
{
    let page = query.page;
    let (total, items) = repo.list_audit_logs(query)?;
    Ok(Paginated::new(items, total, page))
}

pub fn get_audit_log<R>(repo: &R, id: &str) -> ServiceResult<Option<AuditLog>>
where
    R: AuditLogReader + ?Sized,
{
    Ok(repo.get_audit_log_by_id(id)?)
}

pub fn create_audit_log<R>(repo: &R, new_audit_log: &NewAuditLog) -> ServiceResult<AuditLog>
where
    R: AuditLogWriter + ?Sized,
{
    Ok(repo.create_audit_log(new_audit_log)?)
}
