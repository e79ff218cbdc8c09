//! HTTP route handlers, one module per resource under `/api/v1`.

use actix_web::{HttpResponse, Scope, web};
use validator::ValidationErrors;

use crate::services::ServiceError;

pub mod audit_log;
pub mod landlord;
pub mod notification;
pub mod payment;
pub mod property;
pub mod tour;
pub mod user;

/// Assembles the full `/api/v1` route tree. Shared by the server binary and
/// the integration tests.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(property::scope())
        .service(landlord::scope())
        .service(tour::scope())
        .service(payment::scope())
        .service(notification::scope())
        .service(audit_log::scope())
        .service(user::scope())
}

/// Plain-text 404 used by every by-id handler.
pub(crate) fn not_found(resource: &str) -> HttpResponse {
    HttpResponse::NotFound().body(format!("{resource} not found"))
}

pub(crate) fn bad_request(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().body(errors.to_string())
}

pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
