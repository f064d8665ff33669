//! End-to-end tests for the probe endpoints.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use ingress_probe::config::{DashboardMode, ProbeConfig};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_root_json_greeting() {
    let mut config = ProbeConfig::default();
    config.controller_name = "nginx".into();
    let (addr, _shutdown) = common::spawn_server(config).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "Hello nginx");
}

#[tokio::test]
async fn test_root_html_dashboard() {
    let mut config = ProbeConfig::default();
    config.controller_name = "traefik".into();
    config.dashboard.mode = DashboardMode::Html;
    let (addr, _shutdown) = common::spawn_server(config).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .header("Cookie", "route=web-2")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains("Hello traefik"));
    assert!(body.contains("web-2"));
    assert!(body.contains("fetch('/')"));
}

#[tokio::test]
async fn test_set_cookie_emits_jsessionid() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/set-cookie", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = res
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header missing")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("JSESSIONID=test-session-value"));
    // Non-HttpOnly so browser scripts can read it during manual testing
    assert!(!cookie.to_lowercase().contains("httponly"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["설정된_쿠키"], "JSESSIONID");
}

#[tokio::test]
async fn test_check_session_without_cookie() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/check-session", addr))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["route_쿠키"], "없음");
    assert_eq!(body["결과"], "설정되지 않음");
}

#[tokio::test]
async fn test_check_session_echoes_route_cookie() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/check-session", addr))
        .header("Cookie", "route=abc123")
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["route_쿠키"], "abc123");
    assert_eq!(body["결과"], "설정됨");
}

#[tokio::test]
async fn test_cors_preflight_is_empty_204() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .request(
            reqwest::Method::OPTIONS,
            format!("http://{}/cors-test", addr),
        )
        .header("Origin", "https://app.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_get_echoes_origin() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/cors-test", addr))
        .header("Origin", "https://app.example")
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["요청_Origin"], "https://app.example");

    // And the absent sentinel without one
    let res = common::client()
        .get(format!("http://{}/cors-test", addr))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["요청_Origin"], "없음");
}

#[tokio::test]
async fn test_cors_post_fixed_payload() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .post(format!("http://{}/cors-test", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "CORS POST 요청 성공");
}

#[tokio::test]
async fn test_security_headers_listing() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/security-headers", addr))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    let listed = body["확인할_헤더"].as_array().unwrap();
    assert_eq!(listed.len(), 5);
    assert!(listed.iter().any(|h| h == "X-Content-Type-Options"));
}

#[tokio::test]
async fn test_redirect_to_root() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/redirect", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers().get("location").unwrap(), "/");
}

#[tokio::test]
async fn test_redirect_external_is_301() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/redirect-external", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers().get("location").unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_timeout_out_of_range_rejected_without_delay() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let start = Instant::now();
    let res = common::client()
        .get(format!("http://{}/timeout-test?seconds=70", addr))
        .send()
        .await
        .unwrap();

    // Deliberately 200 with an error body, not a 4xx
    assert_eq!(res.status(), StatusCode::OK);
    assert!(start.elapsed() < Duration::from_secs(1));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["오류"], "최대 60초까지만 가능합니다");
}

#[tokio::test]
async fn test_timeout_delays_for_requested_seconds() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let start = Instant::now();
    let res = common::client()
        .get(format!("http://{}/timeout-test?seconds=2", addr))
        .send()
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(elapsed >= Duration::from_secs(2), "returned after {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(2500), "returned after {:?}", elapsed);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "2초 후 응답 완료");
}

#[tokio::test]
async fn test_timeout_sleep_does_not_block_other_requests() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let slow = tokio::spawn({
        let url = format!("http://{}/timeout-test?seconds=3", addr);
        async move { common::client().get(url).send().await.unwrap() }
    });

    // While the slow request sleeps, a fast one must answer immediately.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let start = Instant::now();
    let res = common::client()
        .get(format!("http://{}/check-session", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(start.elapsed() < Duration::from_secs(1));

    let slow_res = slow.await.unwrap();
    assert_eq!(slow_res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_echoes_metadata() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let payload = vec![0u8; 1024];
    let part = reqwest::multipart::Part::bytes(payload)
        .file_name("test.txt")
        .mime_str("text/plain")
        .unwrap();
    let form = reqwest::multipart::Form::new().part("file", part);

    let res = common::client()
        .post(format!("http://{}/upload", addr))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "파일 업로드 성공");
    assert_eq!(body["파일명"], "test.txt");
    assert_eq!(body["크기"], "1024 bytes");
    assert_eq!(body["타입"], "text/plain");
}

#[tokio::test]
async fn test_upload_without_file_field_is_4xx() {
    let (addr, _shutdown) = common::spawn_server(ProbeConfig::default()).await;

    let form = reqwest::multipart::Form::new().text("other", "data");
    let res = common::client()
        .post(format!("http://{}/upload", addr))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_request_info_fields_and_idempotence() {
    let mut config = ProbeConfig::default();
    config.controller_name = "nginx".into();
    let (addr, _shutdown) = common::spawn_server(config).await;

    let client = common::client();
    let first: Value = client
        .get(format!("http://{}/request-info", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("http://{}/request-info", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["컨트롤러"], "nginx");
    assert_eq!(first["요청_메서드"], "GET");
    assert_eq!(first["클라이언트_IP"], "127.0.0.1");
    assert!(first["URL"].as_str().unwrap().ends_with("/request-info"));

    assert_eq!(first["컨트롤러"], second["컨트롤러"]);
    assert_eq!(first["요청_메서드"], second["요청_메서드"]);
}

#[tokio::test]
async fn test_responses_carry_identity_headers() {
    let mut config = ProbeConfig::default();
    config.controller_name = "traefik".into();
    let (addr, _shutdown) = common::spawn_server(config).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-controller-name").unwrap(), "traefik");
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_shutdown_trigger_stops_server() {
    let (addr, shutdown) = common::spawn_server(ProbeConfig::default()).await;

    // Server is up
    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(300)).await;

    let result = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await;
    assert!(result.is_err(), "server should refuse connections after shutdown");
}
