use axum::{
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Success envelope for list endpoints, produced by [`with_total_count`].
#[derive(Serialize)]
pub struct ContentResponse<T> {
    pub content: T,
}

/// Wraps `content` in the success envelope and reports the total number of
/// matches in `X-Total-Count`.
pub fn with_total_count<T: Serialize>(content: T, count: i64) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(count));

    json_response(&ContentResponse { content }, headers)
}

fn json_response<T: Serialize>(body: &T, mut headers: HeaderMap) -> Response {
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    (StatusCode::OK, headers, json).into_response()
}
