//! Proxy timeout probe.
//!
//! Suspends the handler for a caller-chosen number of seconds so upstream
//! read-timeout settings can be verified. The delay is a tokio sleep and
//! never blocks other in-flight requests.
//!
//! Out-of-range requests get a 200 response with an error body rather than a
//! 4xx. Existing proxy test suites detect this failure by inspecting the
//! body, so the status code is kept as observable behavior.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::AppState;

#[derive(Deserialize)]
pub struct TimeoutParams {
    pub seconds: Option<u64>,
}

#[derive(Serialize)]
pub struct TimeoutResponse {
    pub msg: String,
    #[serde(rename = "결과")]
    pub result: &'static str,
}

#[derive(Serialize)]
pub struct TimeoutError {
    #[serde(rename = "오류")]
    pub error: String,
}

/// `GET /timeout-test?seconds=N`
pub async fn timeout_test(
    State(state): State<AppState>,
    Query(params): Query<TimeoutParams>,
) -> Response {
    let config = &state.config.timeout;
    let seconds = params.seconds.unwrap_or(config.default_seconds);

    if seconds > config.max_seconds {
        tracing::debug!(seconds, max = config.max_seconds, "Timeout probe rejected");
        return Json(TimeoutError {
            error: format!("최대 {}초까지만 가능합니다", config.max_seconds),
        })
        .into_response();
    }

    tracing::debug!(seconds, "Timeout probe sleeping");
    tokio::time::sleep(Duration::from_secs(seconds)).await;

    Json(TimeoutResponse {
        msg: format!("{}초 후 응답 완료", seconds),
        result: "타임아웃이 발생하면 프록시 설정을 확인하세요",
    })
    .into_response()
}
