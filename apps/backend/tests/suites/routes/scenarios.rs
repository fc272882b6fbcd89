// End-to-end game scenarios over HTTP, in the order a client drives them:
// reset, read, then a loop of submissions.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use backend::domain::Color::{Blue, Green, Red};
use backend::test_support::create_test_app;
use backend_test_support::responses::read_json;
use serde_json::{json, Value};

use crate::common::{seeded_state, state_with, wire};

const COLORS: [&str; 4] = ["red", "yellow", "green", "blue"];

async fn call<S, B>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status().as_u16();
    (status, read_json(resp, status).await)
}

async fn get_state<S, B>(app: &S) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call(app, test::TestRequest::get().uri("/game-state")).await.1
}

async fn submit<S, B>(app: &S, sequence: Value) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call(
        app,
        test::TestRequest::post()
            .uri("/game-state/sequence")
            .set_json(json!({ "sequence": sequence })),
    )
    .await
}

fn wrong_copy(sequence: &Value) -> Value {
    let mut items = sequence.as_array().expect("sequence array").clone();
    let first = items[0].as_str().expect("color string");
    let replacement = COLORS
        .iter()
        .find(|c| **c != first)
        .expect("another color exists");
    items[0] = json!(replacement);
    Value::Array(items)
}

#[actix_web::test]
async fn scenario_a_reset_then_get() {
    let app = create_test_app(seeded_state()).build().await;

    let (status, _) = call(&app, test::TestRequest::put().uri("/game-state")).await;
    assert_eq!(status, 200);

    let state = get_state(&app).await;
    assert_eq!(state["level"], 1);
    assert_eq!(state["highScore"], 0);
    let seq = state["sequence"].as_array().unwrap();
    assert_eq!(seq.len(), 1);
    assert!(COLORS.contains(&seq[0].as_str().unwrap()));
}

#[actix_web::test]
async fn scenario_b_then_f_record_survives_later_failure() {
    let app = create_test_app(state_with(1, vec![Red], 0)).build().await;

    // B: clear level 1
    let (status, body) = submit(&app, json!(["red"])).await;
    assert_eq!(status, 200);
    assert_eq!(body["gameState"]["level"], 2);
    assert_eq!(body["gameState"]["highScore"], 1);
    assert_eq!(body["gameState"]["sequence"].as_array().unwrap().len(), 2);

    // F: fail at level 2, record stays at 1
    let wrong = wrong_copy(&body["gameState"]["sequence"]);
    let (status, body) = submit(&app, wrong).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "SEQUENCE_MISMATCH");
    assert_eq!(body["gameState"]["level"], 1);
    assert_eq!(body["gameState"]["highScore"], 1);
}

#[actix_web::test]
async fn scenario_c_mismatch_at_level_two() {
    let app = create_test_app(state_with(2, vec![Red, Blue], 0)).build().await;

    let (status, body) = submit(&app, json!(wire(&[Red, Green]))).await;
    assert_eq!(status, 400);
    assert_eq!(body["gameState"]["level"], 1);
    assert_eq!(body["gameState"]["highScore"], 0);
    assert_eq!(body["gameState"]["sequence"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn scenario_d_and_e_leave_state_unchanged() {
    let app = create_test_app(state_with(3, vec![Red, Blue, Red], 0)).build().await;
    let before = get_state(&app).await;

    let (status, body) = submit(&app, json!([])).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "INVALID_INPUT");

    let (status, body) = submit(&app, json!(["red", "blue"])).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Sequence must be exactly 3 items long.");

    assert_eq!(get_state(&app).await, before);
}

#[actix_web::test]
async fn reset_twice_keeps_shape_and_record() {
    let app = create_test_app(state_with(4, vec![Red, Red, Red, Red], 3))
        .build()
        .await;

    for _ in 0..2 {
        let (status, body) = call(&app, test::TestRequest::put().uri("/game-state")).await;
        assert_eq!(status, 200);
        assert_eq!(body["gameState"]["level"], 1);
        assert_eq!(body["gameState"]["sequence"].as_array().unwrap().len(), 1);
        assert_eq!(body["gameState"]["highScore"], 3);
    }
}

#[actix_web::test]
async fn client_loop_climbs_levels_then_fails() {
    let app = create_test_app(seeded_state()).build().await;
    call(&app, test::TestRequest::put().uri("/game-state")).await;

    for level in 1..=6u32 {
        let state = get_state(&app).await;
        assert_eq!(state["level"], level);
        assert_eq!(state["sequence"].as_array().unwrap().len(), level as usize);

        let (status, body) = submit(&app, state["sequence"].clone()).await;
        assert_eq!(status, 200);
        assert_eq!(body["gameState"]["highScore"], level);
    }

    let state = get_state(&app).await;
    assert_eq!(state["level"], 7);
    let (status, body) = submit(&app, wrong_copy(&state["sequence"])).await;
    assert_eq!(status, 400);
    assert_eq!(body["gameState"]["level"], 1);
    assert_eq!(body["gameState"]["highScore"], 6);

    // A fresh climb below the record leaves it alone
    let state = get_state(&app).await;
    let (_, body) = submit(&app, state["sequence"].clone()).await;
    assert_eq!(body["gameState"]["highScore"], 6);
}
