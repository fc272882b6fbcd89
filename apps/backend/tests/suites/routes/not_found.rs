// Tests for the JSON 404 fallback.

use actix_web::test;
use backend::test_support::create_test_app;
use backend_test_support::responses::read_json;
use serde_json::json;

use crate::common::seeded_state;

#[actix_web::test]
async fn unknown_paths_return_json_404() {
    let app = create_test_app(seeded_state()).build().await;

    for uri in ["/", "/games", "/game-state/extra", "/api/v1/unknown", "/api/v2/game-state"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let json = read_json(test::call_service(&app, req).await, 404).await;
        assert_eq!(json, json!({ "error": "Resource not found" }), "uri {uri}");
    }
}

#[actix_web::test]
async fn unsupported_methods_on_known_paths_return_404() {
    let app = create_test_app(seeded_state()).build().await;

    let cases = [
        test::TestRequest::delete().uri("/game-state"),
        test::TestRequest::post().uri("/game-state"),
        test::TestRequest::get().uri("/game-state/sequence"),
        test::TestRequest::put().uri("/game-state/sequence"),
        test::TestRequest::delete().uri("/api/v1/game-state"),
    ];
    for req in cases {
        let resp = test::call_service(&app, req.to_request()).await;
        let json = read_json(resp, 404).await;
        assert_eq!(json["error"], "Resource not found");
    }
}
