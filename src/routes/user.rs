//! Read-only user directory. Accounts are created and mutated by the
//! external identity provider.

use actix_web::{HttpResponse, Responder, Scope, get, web};
use validator::Validate;

use crate::dto::UserFilterParams;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response, not_found};
use crate::services::user as service;

pub fn scope() -> Scope {
    web::scope("/users").service(list_users).service(get_user)
}

#[get("")]
async fn list_users(
    repo: web::Data<DieselRepository>,
    params: web::Query<UserFilterParams>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return bad_request(e);
    }
    match service::list_users(repo.get_ref(), params.into_query()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
async fn get_user(repo: web::Data<DieselRepository>, id: web::Path<String>) -> impl Responder {
    match service::get_user(repo.get_ref(), &id) {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => not_found("User"),
        Err(e) => error_response(e),
    }
}
