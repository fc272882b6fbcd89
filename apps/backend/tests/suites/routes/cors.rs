// Tests for the permissive CORS middleware.
//
// Every response, including errors and 404s, carries the allow headers, and
// OPTIONS on any path is a 204 preflight.

use actix_web::http::Method;
use actix_web::test;
use backend::test_support::create_test_app;
use backend_test_support::responses::assert_cors_headers;
use serde_json::json;

use crate::common::seeded_state;

#[actix_web::test]
async fn preflight_on_known_route_is_204() {
    let app = create_test_app(seeded_state()).build().await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/game-state/sequence")
        .insert_header(("origin", "http://localhost:5500"))
        .insert_header(("access-control-request-method", "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 204);
    assert_cors_headers(resp.headers());
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn preflight_on_unknown_path_is_still_204() {
    let app = create_test_app(seeded_state()).build().await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/no/such/thing")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 204);
    assert_cors_headers(resp.headers());
}

#[actix_web::test]
async fn headers_present_without_origin() {
    let app = create_test_app(seeded_state()).build().await;

    let req = test::TestRequest::put().uri("/game-state").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert_cors_headers(resp.headers());
}

#[actix_web::test]
async fn headers_present_on_errors_and_404() {
    let app = create_test_app(seeded_state()).build().await;

    let req = test::TestRequest::post()
        .uri("/game-state/sequence")
        .set_json(json!({ "sequence": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    assert_cors_headers(resp.headers());

    let req = test::TestRequest::get().uri("/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    assert_cors_headers(resp.headers());
}
