//! Root dashboard and request-metadata probes.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::DashboardMode;
use crate::dashboard;
use crate::http::AppState;

#[derive(Serialize)]
pub struct Greeting {
    pub msg: String,
}

#[derive(Serialize)]
pub struct RequestInfoResponse {
    #[serde(rename = "컨트롤러")]
    pub controller: String,
    #[serde(rename = "요청_메서드")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "클라이언트_IP")]
    pub client_ip: Option<String>,
    #[serde(rename = "확인방법")]
    pub how_to_check: &'static str,
}

/// `GET /` — JSON greeting or HTML dashboard, per configured render mode.
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let controller = &state.config.controller_name;

    match state.config.dashboard.mode {
        DashboardMode::Json => Json(Greeting {
            msg: format!("Hello {}", controller),
        })
        .into_response(),
        mode @ (DashboardMode::Html | DashboardMode::HtmlSimple) => {
            Html(dashboard::render(mode, controller, &headers)).into_response()
        }
    }
}

/// `GET /request-info` — request metadata as seen through the ingress chain.
///
/// The URL is reconstructed from the Host header and request target; the
/// client IP is the peer of the TCP connection, which behind a proxy is the
/// proxy itself (hence the hint to check `X-Forwarded-For`).
pub async fn request_info(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<RequestInfoResponse> {
    let url = match headers.get("host").and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}{}", host, uri),
        None => uri.to_string(),
    };

    Json(RequestInfoResponse {
        controller: state.config.controller_name.clone(),
        method: method.to_string(),
        url,
        client_ip: Some(addr.ip().to_string()),
        how_to_check: "X-Forwarded-For 헤더를 확인하세요",
    })
}
