//! Dashboard HTML rendering.
//!
//! One renderer replaces the three near-identical page variants the upstream
//! deployments shipped. Plain string assembly; the page is a few tables and
//! needs no template engine.
//!
//! The rich mode embeds a script that re-fetches `/` and lists the *response*
//! headers: CORS and security headers injected by the ingress layer cannot be
//! read by a page from the response that delivered it, so a second fetch from
//! the browser is the only way to surface them.

use axum::http::HeaderMap;

use crate::config::DashboardMode;
use crate::http::cookies::parse_cookies;

/// Request headers worth showing on the dashboard. Fixed allow-list; dumping
/// every header would drown the proxy-added ones in browser noise.
pub const DISPLAYED_REQUEST_HEADERS: [&str; 8] = [
    "host",
    "user-agent",
    "origin",
    "via",
    "x-forwarded-for",
    "x-forwarded-proto",
    "x-real-ip",
    "x-request-id",
];

/// Render the dashboard page for the given mode.
///
/// `DashboardMode::Json` is handled by the root handler itself and never
/// reaches here.
pub fn render(mode: DashboardMode, controller_name: &str, headers: &HeaderMap) -> String {
    let mut page = String::with_capacity(2048);

    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<title>Ingress Probe</title>\n");
    page.push_str(
        "<style>body{font-family:sans-serif;margin:2em}\
         table{border-collapse:collapse;margin:1em 0}\
         td,th{border:1px solid #999;padding:4px 10px;text-align:left}</style>\n",
    );
    page.push_str("</head>\n<body>\n");

    page.push_str(&format!(
        "<h1>Hello {}</h1>\n",
        escape_html(controller_name)
    ));

    render_cookie_table(&mut page, headers);

    if mode == DashboardMode::Html {
        render_header_table(&mut page, headers);
        render_response_header_script(&mut page);
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_cookie_table(page: &mut String, headers: &HeaderMap) {
    page.push_str("<h2>Request cookies</h2>\n");

    let cookies = parse_cookies(headers);
    if cookies.is_empty() {
        page.push_str("<p>(no cookies)</p>\n");
        return;
    }

    page.push_str("<table>\n<tr><th>Name</th><th>Value</th></tr>\n");
    for (name, value) in cookies {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&name),
            escape_html(&value)
        ));
    }
    page.push_str("</table>\n");
}

fn render_header_table(page: &mut String, headers: &HeaderMap) {
    page.push_str("<h2>Request headers</h2>\n");
    page.push_str("<table>\n<tr><th>Header</th><th>Value</th></tr>\n");

    for name in DISPLAYED_REQUEST_HEADERS {
        let value = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            name,
            escape_html(value)
        ));
    }
    page.push_str("</table>\n");
}

fn render_response_header_script(page: &mut String) {
    page.push_str("<h2>Response headers (as injected by the ingress layer)</h2>\n");
    page.push_str("<table id=\"response-headers\">\n");
    page.push_str("<tr><th>Header</th><th>Value</th></tr>\n</table>\n");
    page.push_str(
        "<script>\n\
         fetch('/').then(function (res) {\n\
           var table = document.getElementById('response-headers');\n\
           res.headers.forEach(function (value, name) {\n\
             var row = table.insertRow();\n\
             row.insertCell().textContent = name;\n\
             row.insertCell().textContent = value;\n\
           });\n\
         });\n\
         </script>\n",
    );
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
