//! Problem Details test helpers
//!
//! Utilities for asserting `application/problem+json` responses in unit and
//! integration tests without depending on server types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the server's problem document, so assertions do not
/// depend on server types.
#[derive(Debug, Deserialize)]
struct ProblemDocument {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that a `ServiceResponse` conforms to the stable error contract:
/// - HTTP status matches expected
/// - body is problem+json with the expected `code`
/// - `type` URI ends with the code
/// - `x-trace-id` header exists and matches the body `trace_id`
pub async fn assert_problem_details_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    );
}

/// Assert that raw response parts conform to the stable error contract.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Expected problem+json content type, got '{content_type}'"
    );

    let problem: ProblemDocument = serde_json::from_slice(body_bytes)
        .expect("Response body should be valid ProblemDetails JSON");

    // Trace id parity: body trace_id should equal the x-trace-id header
    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    // Contract fields
    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(
        problem.type_.ends_with(&problem.code),
        "Expected type URI '{}' to end with code '{}'",
        problem.type_,
        problem.code
    );
    assert!(!problem.title.is_empty(), "Problem title should not be empty");

    // Detail substring if provided
    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "Expected detail to contain '{}', but got '{}'",
            expected_detail,
            problem.detail
        );
    }
}
