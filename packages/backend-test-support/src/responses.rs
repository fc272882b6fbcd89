//! Response-shape assertions shared by route tests.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{self, HeaderMap};
use actix_web::test;
use serde_json::Value;

/// Assert the permissive CORS headers every response carries.
pub fn assert_cors_headers(headers: &HeaderMap) {
    let get = |name: header::HeaderName| {
        headers
            .get(&name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| panic!("missing header {name}"))
    };
    assert_eq!(get(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert_eq!(
        get(header::ACCESS_CONTROL_ALLOW_METHODS),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(get(header::ACCESS_CONTROL_ALLOW_HEADERS), "Content-Type");
}

/// Assert status and JSON content type, then return the parsed body.
pub async fn read_json<B>(resp: ServiceResponse<B>, expected_status: u16) -> Value
where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}

/// Assert the 400 error body shape and return it.
pub async fn assert_error_body<B>(
    resp: ServiceResponse<B>,
    expected_code: &str,
    expected_message: &str,
) -> Value
where
    B: MessageBody,
{
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert!(
        trace_id.is_some_and(|t| !t.is_empty()),
        "error responses should carry X-Trace-Id"
    );

    let json = read_json(resp, 400).await;
    assert_eq!(json["code"], expected_code);
    assert_eq!(json["message"], expected_message);
    json
}
