use actix_web::{HttpResponse, Responder, Scope, delete, get, post, web};
use validator::Validate;

use crate::domain::notification::NewNotification;
use crate::dto::NotificationFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::notification as service;

pub fn scope() -> Scope {
    web::scope("/notifications")
        .service(list_notifications)
        .service(get_notification)
        .service(create_notification)
        .service(toggle_notification_read)
        .service(delete_notification)
}

#[get("")]
async fn list_notifications(
    repo: web::Data<DieselRepository>,
    params: web::Query<NotificationFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_notifications(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_notification(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match service::get_notification(repo.get_ref(), &id) {
        Ok(Some(notification)) => HttpResponse::Ok().json(notification),
        Ok(None) => not_found("Notification"),
        Err(e) => error_response(e),
    }
}

#[post("")]
async fn create_notification(
    repo: web::Data<DieselRepository>,
    body: web::Json<NewNotification>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::create_notification(repo.get_ref(), &body) {
        Ok(notification) => HttpResponse::Created().json(notification),
        Err(e) => error_response(e),
    }
}

/// Flips the read flag; the new value is derived server-side from the stored
/// row, so the request carries no body.
#[post("/{id}/toggle-read")]
async fn toggle_notification_read(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match service::toggle_notification_read(repo.get_ref(), &id) {
        Ok(Some(notification)) => HttpResponse::Ok().json(notification),
        Ok(None) => not_found("Notification"),
        Err(e) => error_response(e),
    }
}

#[delete("/{id}")]
async fn delete_notification(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match service::delete_notification(repo.get_ref(), &id) {
        Ok(Some(notification)) => HttpResponse::Ok().json(notification),
        Ok(None) => not_found("Notification"),
        Err(e) => error_response(e),
    }
}
