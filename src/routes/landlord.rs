use actix_web::{HttpResponse, Responder, Scope, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::landlord::{NewLandlordProfile, UpdateLandlordProfile};
use crate::dto::LandlordFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::landlord as service;

pub fn scope() -> Scope {
    web::scope("/landlords")
        .service(list_landlords)
        .service(get_landlord)
        .service(create_landlord)
        .service(update_landlord)
        .service(delete_landlord)
}

#[get("")]
async fn list_landlords(
    repo: web::Data<DieselRepository>,
    params: web::Query<LandlordFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_landlords(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_landlord(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::get_landlord(repo.get_ref(), &id) {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => not_found("Landlord profile"),
        Err(e) => error_response(e),
    }
}

#[post("")]
async fn create_landlord(
    repo: web::Data<DieselRepository>,
    body: web::Json<NewLandlordProfile>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::create_landlord(repo.get_ref(), &body) {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => error_response(e),
    }
}

#[patch("/{id}")]
async fn update_landlord(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    body: web::Json<UpdateLandlordProfile>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::update_landlord(repo.get_ref(), &id, &body) {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => not_found("Landlord profile"),
        Err(e) => error_response(e),
    }
}

#[delete("/{id}")]
async fn delete_landlord(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match service::delete_landlord(repo.get_ref(), &id) {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => not_found("Landlord profile"),
        Err(e) => error_response(e),
    }
}
