
use actix_web::{http::StatusCode, test};
use artfolio_backend::{
    db::document_store::Collection,
    repositories::document_repo::DocumentRepo,
    use_cases::seed::Seeder,
};
use serde_json::{json, Value};
use test_utils::TestContext;

async fn seeded() -> TestContext {
    let ctx = TestContext::new();
    Seeder::new(DocumentRepo::new(ctx.store.clone()))
        .seed_if_empty()
        .await
        .unwrap();
    ctx
}

#[actix_web::test]
async fn category_filter_returns_only_that_category() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/api/artworks?category=paintings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(data.len(), 3);
    assert!(data.iter().all(|a| a["category"] == "paintings"));
}

#[actix_web::test]
async fn category_all_or_missing_returns_everything() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    for uri in ["/api/artworks?category=all", "/api/artworks"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 15, "{uri}");
    }
}

#[actix_web::test]
async fn unknown_category_returns_an_empty_gallery() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/api/artworks?category=sculpture").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true, "data": [] }));
}

#[actix_web::test]
async fn create_artwork_returns_201_and_persists() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/artworks")
        .set_json(json!({
            "title": "Harbour at Dusk",
            "category": "paintings",
            "imageUrl": "https://images.example.com/harbour.jpg"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "Harbour at Dusk");
    assert!(body["data"]["id"].is_string());
    assert_eq!(ctx.count(Collection::Artworks).await, 1);
}

#[actix_web::test]
async fn invalid_artwork_is_rejected_without_persisting() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/artworks")
        .set_json(json!({ "title": "", "category": "paintings", "imageUrl": "not a url" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert!(!body["details"].as_array().unwrap().is_empty());
    assert_eq!(ctx.count(Collection::Artworks).await, 0);
}

fn testimonial(email: &str, rating: Value) -> Value {
    json!({
        "name": "Dana Whitfield",
        "email": email,
        "message": "The pet portrait of our beagle is wonderful.",
        "rating": rating,
        "artworkType": "portrait",
        "wouldRecommend": true
    })
}

#[actix_web::test]
async fn new_testimonial_is_pending_and_hidden_from_the_list() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .set_json(testimonial("dana@example.com", json!(5)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "pending");

    let req = test::TestRequest::get().uri("/api/testimonials").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert!(data.iter().all(|t| t["status"] == "approved"));
}

#[actix_web::test]
async fn published_testimonials_are_newest_first() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/api/testimonials").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Sarah Johnson", "Michael Chen", "Emily Rodriguez"]);
}

#[actix_web::test]
async fn second_testimonial_from_same_email_is_a_conflict() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .set_json(testimonial("dana@example.com", json!(4)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .set_json(testimonial("DANA@example.com", json!(5)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("already submitted"));
    assert_eq!(ctx.count(Collection::Testimonials).await, 1);
}

#[actix_web::test]
async fn seeded_approved_email_cannot_submit_again() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .set_json(testimonial("sarah.j@email.com", json!(5)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    assert_eq!(ctx.count(Collection::Testimonials).await, 3);
}

#[actix_web::test]
async fn out_of_range_ratings_are_rejected_before_persisting() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    for rating in [json!(0), json!(6), json!(3.5)] {
        let req = test::TestRequest::post()
            .uri("/api/testimonials")
            .set_json(testimonial("rater@example.com", rating.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "rating {rating}");
    }
    assert_eq!(ctx.count(Collection::Testimonials).await, 0);
}

#[actix_web::test]
async fn wrongly_typed_testimonial_fields_are_named_in_a_422() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let mut body = testimonial("typed@example.com", json!("5"));
    let req = test::TestRequest::post().uri("/api/testimonials").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let details: Value = test::read_body_json(resp).await;
    assert_eq!(details["error"], "Validation failed");
    assert_eq!(details["details"][0]["field"], "rating");

    body["rating"] = json!(5);
    body["wouldRecommend"] = json!("yes");
    let req = test::TestRequest::post().uri("/api/testimonials").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let details: Value = test::read_body_json(resp).await;
    assert_eq!(details["details"][0]["field"], "wouldRecommend");

    assert_eq!(ctx.count(Collection::Testimonials).await, 0);
}

#[actix_web::test]
async fn padded_testimonial_text_must_meet_lengths_once_trimmed() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let mut body = testimonial("padded@example.com", json!(5));
    body["name"] = json!("  ");
    body["message"] = json!("         x");
    let req = test::TestRequest::post().uri("/api/testimonials").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.count(Collection::Testimonials).await, 0);
}

#[actix_web::test]
async fn services_are_listed() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::get().uri("/api/services").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn new_blog_post_gets_a_slug_and_is_listed_first() {
    let ctx = seeded().await;
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/blog")
        .set_json(json!({
            "title": "Stretching Your Own Canvas",
            "excerpt": "A step-by-step guide.",
            "content": "<p>Start with the frame.</p><script>alert(1)</script>",
            "category": "tutorials",
            "author": "Nikkitha",
            "imageUrl": "/images/artworks/canvas.jpg",
            "readTime": "4 min read",
            "tags": ["canvas", "how-to"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["slug"], "stretching-your-own-canvas");
    assert!(!body["data"]["content"].as_str().unwrap().contains("<script>"));

    let req = test::TestRequest::get().uri("/api/blog").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let posts = body["data"].as_array().unwrap();
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0]["title"], "Stretching Your Own Canvas");
}

#[actix_web::test]
async fn blog_post_with_unknown_category_is_rejected() {
    let ctx = TestContext::new();
    let app = test_app!(ctx.state);

    let req = test::TestRequest::post()
        .uri("/api/blog")
        .set_json(json!({
            "title": "Gossip",
            "excerpt": "x",
            "content": "y",
            "category": "news",
            "author": "Nikkitha",
            "imageUrl": "/images/x.jpg",
            "readTime": "1 min read"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.count(Collection::Blog).await, 0);
}

#[actix_web::test]
async fn seeding_twice_adds_nothing() {
    let ctx = seeded().await;
    let before = ctx.count(Collection::Artworks).await;

    let outcome = Seeder::new(DocumentRepo::new(ctx.store.clone()))
        .seed_if_empty()
        .await
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(ctx.count(Collection::Artworks).await, before);
    assert_eq!(ctx.count(Collection::Testimonials).await, 3);
    assert_eq!(ctx.count(Collection::Services).await, 6);
}
