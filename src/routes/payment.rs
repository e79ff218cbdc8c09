use actix_web::{HttpResponse, Responder, Scope, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::payment::{NewPayment, UpdatePayment};
use crate::dto::PaymentFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::payment as service;

pub fn scope() -> Scope {
    web::scope("/payments")
        .service(list_payments)
        .service(get_payment)
        .service(create_payment)
        .service(update_payment)
        .service(delete_payment)
}

#[get("")]
async fn list_payments(
    repo: web::Data<DieselRepository>,
    params: web::Query<PaymentFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_payments(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_payment(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::get_payment(repo.get_ref(), &id) {
        Ok(Some(payment)) => HttpResponse::Ok().json(payment),
        Ok(None) => not_found("Payment"),
        Err(e) => error_response(e),
    }
}

#[post("")]
async fn create_payment(
    repo: web::Data<DieselRepository>,
    body: web::Json<NewPayment>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::create_payment(repo.get_ref(), &body) {
        Ok(payment) => HttpResponse::Created().json(payment),
        Err(e) => error_response(e),
    }
}

#[patch("/{id}")]
async fn update_payment(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    body: web::Json<UpdatePayment>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::update_payment(repo.get_ref(), &id, &body) {
        Ok(Some(payment)) => HttpResponse::Ok().json(payment),
        Ok(None) => not_found("Payment"),
        Err(e) => error_response(e),
    }
}

#[delete("/{id}")]
async fn delete_payment(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::delete_payment(repo.get_ref(), &id) {
        Ok(Some(payment)) => HttpResponse::Ok().json(payment),
        Ok(None) => not_found("Payment"),
        Err(e) => error_response(e),
    }
}
