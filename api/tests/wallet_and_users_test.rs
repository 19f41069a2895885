//! End-to-end tests for the wallet and registration endpoints

mod common;

use actix_web::test;
use serde_json::{json, Value};

use sr_api::app::create_app;

#[actix_web::test]
async fn test_wallet_is_created_lazily_on_first_read() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get().uri("/api/wallet/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["userId"], 5);
    assert_eq!(body["data"]["totalCredits"], 0);
    assert_eq!(body["data"]["cashBalance"], 0);

    // A second read returns the same wallet
    let wallet_id = body["data"]["id"].clone();
    let req = test::TestRequest::get().uri("/api/wallet/5").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["id"], wallet_id);
}

#[actix_web::test]
async fn test_explicit_wallet_create_conflicts_on_duplicate() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::post().uri("/api/wallet/create/9").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post().uri("/api/wallet/create/9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_user_registration() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "password": "hunter2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["role"], "USER");
    assert!(
        body["data"].get("passwordHash").is_none(),
        "password hash must not be serialized"
    );

    // Duplicate email conflicts
    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "name": "Someone Else",
            "email": "asha@example.com",
            "password": "other"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn test_registration_validation() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "name": "Asha",
            "email": "not-an-email",
            "password": "pw"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email format");

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "email": "a@x.com",
            "password": "pw"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Required field: name");
}

#[actix_web::test]
async fn test_unknown_route_is_enveloped_404() {
    let app = test::init_service(create_app(common::test_state())).await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
