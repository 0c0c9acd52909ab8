
use actix_web::{http::{header, StatusCode}, test};
use serde_json::{json, Value};
use test_utils::{unreachable_state, TestContext};

#[actix_web::test]
async fn unknown_api_path_is_404() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/api/paintings").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Route not found" }));
}

#[actix_web::test]
async fn unsupported_method_is_404_not_405() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    for req in [
        test::TestRequest::delete().uri("/api/artworks").to_request(),
        test::TestRequest::get().uri("/api/contact").to_request(),
        test::TestRequest::post().uri("/api/services").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn trailing_slash_is_normalized() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/api/services/").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn malformed_json_is_a_json_400() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}

#[actix_web::test]
async fn store_outage_surfaces_as_500_with_message() {
    let state = unreachable_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/artworks").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("pool timed out"));
}

#[actix_web::test]
async fn health_reports_store_status() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["database"], "OK");

    let state = unreachable_state();
    let app = test_app!(state);
    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn home_lists_entry_points() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["endpoints"], "/api");
}
