use actix_web::{App, test, web};
use serde_json::{Value, json};

use terravista::repository::DieselRepository;
use terravista::routes::api_scope;

mod common;

macro_rules! test_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new(
                    $test_db.pool().clone(),
                )))
                .service(api_scope()),
        )
        .await
    };
}

fn property_payload() -> Value {
    json!({
        "ownerId": "u1",
        "title": "Lakeside villa",
        "price": "250000.00",
        "address": "1 Main St",
        "city": "Austin",
        "state": "TX",
        "zipCode": "73301",
        "size": 120,
        "bedrooms": 3,
        "bathrooms": "2.0"
    })
}

#[actix_web::test]
async fn test_create_property_applies_defaults() {
    let test_db = common::TestDb::new("test_routes_create_property.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    let app = test_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/properties")
            .set_json(property_payload())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["status"], "draft");
    assert_eq!(created["country"], "USA");

    // The new listing is visible through the filtered list.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/properties?city=Austin")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["meta"]["total"], 1);
    assert_eq!(page["meta"]["page"], 1);
    assert_eq!(page["data"][0]["id"], created["id"]);
}

#[actix_web::test]
async fn test_missing_property_is_plain_text_404() {
    let test_db = common::TestDb::new("test_routes_404.db");
    let app = test_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/properties/does-not-exist")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Property not found");
}

#[actix_web::test]
async fn test_invalid_list_params_are_rejected() {
    let test_db = common::TestDb::new("test_routes_bad_params.db");
    let app = test_app!(test_db);

    // limit below the allowed window
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/properties?limit=0")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    // unknown sort column
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/properties?sortBy=password")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_payment_status_patch_leaves_amount_unchanged() {
    let test_db = common::TestDb::new("test_routes_payment_patch.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "buyer");
    let app = test_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/payments")
            .set_json(json!({
                "userId": "u1",
                "amount": "1500.00",
                "gateway": "midtrans"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let payment: Value = test::read_body_json(resp).await;
    assert_eq!(payment["currency"], "IDR");
    assert_eq!(payment["planType"], "full_payment");
    assert_eq!(payment["status"], "pending");

    let id = payment["id"].as_str().unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/v1/payments/{id}"))
            .set_json(json!({"status": "completed"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let patched: Value = test::read_body_json(resp).await;
    assert_eq!(patched["status"], "completed");
    assert_eq!(patched["amount"], "1500.00");
}

#[actix_web::test]
async fn test_notification_toggle_read() {
    let test_db = common::TestDb::new("test_routes_toggle_read.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "buyer");
    let app = test_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/notifications")
            .set_json(json!({
                "userId": "u1",
                "type": "tour_confirmed",
                "title": "Your tour is confirmed",
                "message": "See you Saturday"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let notification: Value = test::read_body_json(resp).await;
    assert_eq!(notification["read"], false);
    assert_eq!(notification["type"], "tour_confirmed");

    let id = notification["id"].as_str().unwrap();
    let toggle_uri = format!("/api/v1/notifications/{id}/toggle-read");

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri(&toggle_uri).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let toggled: Value = test::read_body_json(resp).await;
    assert_eq!(toggled["read"], true);

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri(&toggle_uri).to_request(),
    )
    .await;
    let toggled: Value = test::read_body_json(resp).await;
    assert_eq!(toggled["read"], false);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/notifications/missing/toggle-read")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_audit_logs_have_no_mutation_routes() {
    let test_db = common::TestDb::new("test_routes_audit_append_only.db");
    let app = test_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/audit-logs")
            .set_json(json!({"action": "property.publish"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let entry: Value = test::read_body_json(resp).await;
    let id = entry["id"].as_str().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/v1/audit-logs/{id}"))
            .set_json(json!({"action": "tampered"}))
            .to_request(),
    )
    .await;
    assert!(resp.status() == 404 || resp.status() == 405);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/audit-logs/{id}"))
            .to_request(),
    )
    .await;
    assert!(resp.status() == 404 || resp.status() == 405);

    // The record is still there, untouched.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/audit-logs/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["action"], "property.publish");
}

#[actix_web::test]
async fn test_users_directory_is_read_only() {
    let test_db = common::TestDb::new("test_routes_users_read_only.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    let app = test_app!(test_db);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/users").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["meta"]["total"], 1);
    assert_eq!(page["data"][0]["email"], "alice@example.com");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "Mallory"}))
            .to_request(),
    )
    .await;
    assert!(resp.status() == 404 || resp.status() == 405);
}
