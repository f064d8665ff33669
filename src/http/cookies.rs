//! Request cookie parsing.
//!
//! The probe only ever reads cookies an upstream load balancer injected, so a
//! minimal `Cookie` header parser is all that is needed: name/value pairs
//! separated by `;`, first occurrence wins.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Parse the `Cookie` request header into (name, value) pairs, in order.
///
/// Malformed segments (no `=`) are skipped. Quoted values keep their quotes;
/// the ingress cookies this tool inspects never use them.
pub fn parse_cookies(headers: &HeaderMap) -> Vec<(String, String)> {
    let mut cookies = Vec::new();
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for segment in raw.split(';') {
            if let Some((name, value)) = segment.split_once('=') {
                let name = name.trim();
                if !name.is_empty() {
                    cookies.push((name.to_string(), value.trim().to_string()));
                }
            }
        }
    }
    cookies
}

/// Look up a single request cookie by name.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    parse_cookies(headers)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}
