//! Security-header probe.
//!
//! Returns the list of headers the ingress layer is expected to inject on
//! responses; callers compare it against what actually arrived.

use axum::Json;
use serde::Serialize;

/// Headers an ingress security policy is expected to add.
pub const EXPECTED_SECURITY_HEADERS: [&str; 5] = [
    "X-Content-Type-Options",
    "X-XSS-Protection",
    "X-Frame-Options",
    "Pragma",
    "Cache-Control",
];

#[derive(Serialize)]
pub struct SecurityHeadersResponse {
    pub msg: &'static str,
    #[serde(rename = "확인할_헤더")]
    pub headers_to_check: &'static [&'static str],
    #[serde(rename = "확인방법")]
    pub how_to_check: &'static str,
}

/// `GET /security-headers`
pub async fn security_headers() -> Json<SecurityHeadersResponse> {
    Json(SecurityHeadersResponse {
        msg: "보안 헤더 확인",
        headers_to_check: &EXPECTED_SECURITY_HEADERS,
        how_to_check: "브라우저 개발자도구에서 응답 헤더를 확인하세요",
    })
}
