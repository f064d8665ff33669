//! Redirect probes.
//!
//! Verify that the ingress layer forwards redirect status codes and
//! `Location` headers unrewritten.

use axum::extract::State;
use axum::response::Redirect;

use crate::http::AppState;

/// `GET /redirect` — temporary (307) redirect back to the dashboard.
pub async fn redirect_root() -> Redirect {
    Redirect::temporary("/")
}

/// `GET /redirect-external` — permanent (301) redirect to an external site,
/// configurable for environments where example.com is unreachable.
pub async fn redirect_external(State(state): State<AppState>) -> Redirect {
    Redirect::permanent(&state.config.redirect.external_url)
}
