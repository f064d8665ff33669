//! CORS probes.
//!
//! None of these handlers set `Access-Control-Allow-*` headers themselves;
//! the ingress layer in front is expected to inject them, and callers verify
//! propagation by inspecting the response headers.

use axum::http::header::ORIGIN;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use crate::probes::ABSENT;

#[derive(Serialize)]
pub struct CorsPostResponse {
    pub msg: &'static str,
    #[serde(rename = "확인방법")]
    pub how_to_check: &'static str,
}

#[derive(Serialize)]
pub struct CorsGetResponse {
    pub msg: &'static str,
    #[serde(rename = "요청_Origin")]
    pub request_origin: String,
    #[serde(rename = "확인방법")]
    pub how_to_check: &'static str,
}

/// `OPTIONS /cors-test` — preflight target; empty 204 regardless of headers.
pub async fn cors_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `POST /cors-test` — fixed success payload.
pub async fn cors_post() -> Json<CorsPostResponse> {
    Json(CorsPostResponse {
        msg: "CORS POST 요청 성공",
        how_to_check: "응답 헤더에 Access-Control-Allow-Origin이 있는지 확인하세요",
    })
}

/// `GET /cors-test` — echoes the request `Origin` header.
pub async fn cors_get(headers: HeaderMap) -> Json<CorsGetResponse> {
    let origin = headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(ABSENT)
        .to_string();

    tracing::debug!(origin = %origin, "CORS GET probe");

    Json(CorsGetResponse {
        msg: "CORS GET 요청 성공",
        request_origin: origin,
        how_to_check: "응답 헤더에 Access-Control-Allow-Origin이 있는지 확인하세요",
    })
}
