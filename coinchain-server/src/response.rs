//! JSON responses carrying a permissive CORS header.

use axum::Json;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serializes `body` as JSON and allows every origin.
///
/// `headers` are merged into the response. `Access-Control-Allow-Origin` is
/// always `*`, whatever the caller passed for it.
pub fn corsify<T: Serialize>(status: StatusCode, body: &T, headers: HeaderMap) -> Response {
    let mut response = (status, headers, Json(body)).into_response();
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};

    #[test]
    fn test_corsify_sets_status_and_cors() {
        let response = corsify(StatusCode::OK, &serde_json::json!({"id": 1}), HeaderMap::new());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_corsify_merges_caller_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=60"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("https://example.com"),
        );

        let response = corsify(StatusCode::BAD_REQUEST, &"oops", headers);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CACHE_CONTROL], "max-age=60");

        let origins: Vec<_> = response
            .headers()
            .get_all(ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(origins, ["*"]);
    }
}
