use actix_web::{HttpResponse, Responder, Scope, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::tour::{NewTour, UpdateTour};
use crate::dto::TourFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::tour as service;

pub fn scope() -> Scope {
    web::scope("/tours")
        .service(list_tours)
        .service(get_tour)
        .service(create_tour)
        .service(update_tour)
        .service(delete_tour)
}

#[get("")]
async fn list_tours(
    repo: web::Data<DieselRepository>,
    params: web::Query<TourFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_tours(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_tour(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::get_tour(repo.get_ref(), &id) {
        Ok(Some(tour)) => HttpResponse::Ok().json(tour),
        Ok(None) => not_found("Tour"),
        Err(e) => error_response(e),
    }
}

#[post("")]
async fn create_tour(repo: web::Data<DieselRepository>, body: web::Json<NewTour>) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::create_tour(repo.get_ref(), &body) {
        Ok(tour) => HttpResponse::Created().json(tour),
        Err(e) => error_response(e),
    }
}

#[patch("/{id}")]
async fn update_tour(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    body: web::Json<UpdateTour>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::update_tour(repo.get_ref(), &id, &body) {
        Ok(Some(tour)) => HttpResponse::Ok().json(tour),
        Ok(None) => not_found("Tour"),
        Err(e) => error_response(e),
    }
}

#[delete("/{id}")]
async fn delete_tour(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::delete_tour(repo.get_ref(), &id) {
        Ok(Some(tour)) => HttpResponse::Ok().json(tour),
        Ok(None) => not_found("Tour"),
        Err(e) => error_response(e),
    }
}
