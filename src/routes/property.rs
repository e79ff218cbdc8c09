use actix_web::{HttpResponse, Responder, Scope, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::property::{NewProperty, UpdateProperty};
use crate::dto::PropertyFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::property as service;

pub fn scope() -> Scope {
    web::scope("/properties")
        .service(list_properties)
        .service(get_property)
        .service(create_property)
        .service(update_property)
        .service(delete_property)
}

#[get("")]
async fn list_properties(
    repo: web::Data<DieselRepository>,
    params: web::Query<PropertyFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_properties(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_property(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::get_property(repo.get_ref(), &id) {
        Ok(Some(property)) => HttpResponse::Ok().json(property),
        Ok(None) => not_found("Property"),
        Err(e) => error_response(e),
    }
}

#[post("")]
async fn create_property(
    repo: web::Data<DieselRepository>,
    body: web::Json<NewProperty>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::create_property(repo.get_ref(), &body) {
        Ok(property) => HttpResponse::Created().json(property),
        Err(e) => error_response(e),
    }
}

#[patch("/{id}")]
async fn update_property(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    body: web::Json<UpdateProperty>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return bad_request(e);
    }
    match service::update_property(repo.get_ref(), &id, &body) {
        Ok(Some(property)) => HttpResponse::Ok().json(property),
        Ok(None) => not_found("Property"),
        Err(e) => error_response(e),
    }
}

#[delete("/{id}")]
async fn delete_property(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match service::delete_property(repo.get_ref(), &id) {
        Ok(Some(property)) => HttpResponse::Ok().json(property),
        Ok(None) => not_found("Property"),
        Err(e) => error_response(e),
    }
}
