//! Cookie and session-affinity probes.
//!
//! `/set-cookie` hands the client a `JSESSIONID` so cookie pass-through can
//! be verified; `/check-session` reports whether a load balancer injected a
//! `route` affinity cookie on the way in.

use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::http::cookies::get_cookie;
use crate::probes::ABSENT;

/// Cookie name set by `/set-cookie`.
pub const SESSION_COOKIE_NAME: &str = "JSESSIONID";

/// Fixed value of the probe session cookie.
pub const SESSION_COOKIE_VALUE: &str = "test-session-value";

/// Affinity cookie name checked by `/check-session`.
pub const AFFINITY_COOKIE_NAME: &str = "route";

#[derive(Serialize)]
pub struct SetCookieResponse {
    pub msg: &'static str,
    #[serde(rename = "설정된_쿠키")]
    pub cookie_name: &'static str,
    #[serde(rename = "확인방법")]
    pub how_to_check: &'static str,
}

#[derive(Serialize)]
pub struct CheckSessionResponse {
    pub msg: &'static str,
    #[serde(rename = "route_쿠키")]
    pub route_cookie: String,
    #[serde(rename = "결과")]
    pub result: &'static str,
}

/// `GET /set-cookie` — always succeeds, non-HttpOnly so browser scripts can
/// read it back during manual testing.
pub async fn set_cookie() -> impl IntoResponse {
    let cookie = format!("{}={}; Path=/", SESSION_COOKIE_NAME, SESSION_COOKIE_VALUE);

    tracing::debug!(cookie = %SESSION_COOKIE_NAME, "Setting probe session cookie");

    (
        [(SET_COOKIE, cookie)],
        Json(SetCookieResponse {
            msg: "쿠키가 설정되었습니다",
            cookie_name: SESSION_COOKIE_NAME,
            how_to_check: "브라우저 개발자도구에서 응답 헤더의 Set-Cookie를 확인하세요",
        }),
    )
}

/// `GET /check-session` — reports the `route` cookie an upstream load
/// balancer may have pinned this client with, or the absent sentinel.
pub async fn check_session(headers: HeaderMap) -> Json<CheckSessionResponse> {
    let route_cookie = get_cookie(&headers, AFFINITY_COOKIE_NAME);

    tracing::debug!(present = route_cookie.is_some(), "Affinity cookie checked");

    let result = if route_cookie.is_some() {
        "설정됨"
    } else {
        "설정되지 않음"
    };

    Json(CheckSessionResponse {
        msg: "세션 쿠키 확인",
        route_cookie: route_cookie.unwrap_or_else(|| ABSENT.to_string()),
        result,
    })
}
