//! Audit log routes. Append-only: list, get and create exist, update and
//! delete deliberately do not.

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use validator::Validate;

use crate::domain::audit_log::NewAuditLog;
use crate::dto::AuditLogFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::audit_log as service;

pub fn scope() -> Scope {
    web::scope("/audit-logs")
        .service(list_audit_logs)
        .service(get_audit_log)
        .service(create_audit_log)
}

#[get("")]
async fn list_audit_logs(
    repo: web::Data<DieselRepository>,
    params: web::Query<AuditLogFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_audit_logs(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_audit_log(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::get_audit_log(repo.get_ref(), &id) {
        Ok(Some(entry)) => HttpResponse::Ok().json(entry),
        Ok(None) => not_found("Audit log"),
        Err(e) => error_response(e),
    }
}

#[post("")]
async fn create_audit_log(
    repo: web::Data<DieselRepository>,
    body: web::Json<NewAuditLog>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::create_audit_log(repo.get_ref(), &body) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(e) => error_response(e),
    }
}
