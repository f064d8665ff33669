//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all probe handlers
//! - Wire up middleware (tracing, request ID, response labeling)
//! - Bind server to listener with graceful shutdown
//!
//! # Design Decisions
//! - Handlers are stateless; the only shared state is the immutable config
//! - The request body limit is disabled so upload pass-through can be probed
//!   with arbitrarily large payloads (accepted limitation of a test tool)
//! - Every response is stamped with `x-controller-name` so affinity tests
//!   against multiple replicas can tell which backend answered

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::ProbeConfig;
use crate::http::request::{MakeRequestUuid, REQUEST_ID_HEADER};
use crate::probes;

/// Response header labeling which probe instance answered.
pub const CONTROLLER_NAME_HEADER: HeaderName = HeaderName::from_static("x-controller-name");

/// Application state injected into handlers.
///
/// Immutable for the process lifetime; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProbeConfig>,
}

/// HTTP server for the probe backend.
pub struct HttpServer {
    router: Router,
    config: ProbeConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProbeConfig) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all probe routes and middleware layers.
    fn build_router(config: &ProbeConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(probes::info::root))
            .route("/set-cookie", get(probes::session::set_cookie))
            .route("/check-session", get(probes::session::check_session))
            .route(
                "/cors-test",
                get(probes::cors::cors_get)
                    .post(probes::cors::cors_post)
                    .options(probes::cors::cors_preflight),
            )
            .route("/security-headers", get(probes::security::security_headers))
            .route("/redirect", get(probes::redirects::redirect_root))
            .route(
                "/redirect-external",
                get(probes::redirects::redirect_external),
            )
            .route("/timeout-test", get(probes::timeout::timeout_test))
            .route("/upload", post(probes::upload::upload))
            .route("/request-info", get(probes::info::request_info))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
                    .layer(DefaultBodyLimit::disable()),
            );

        // Label every response with the configured controller name. Skipped
        // if the name is not a valid header value.
        if let Ok(value) = HeaderValue::from_str(&config.controller_name) {
            router = router.layer(SetResponseHeaderLayer::if_not_present(
                CONTROLLER_NAME_HEADER,
                value,
            ));
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl+C or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

/// Wait for Ctrl+C or an explicit shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if result.is_err() {
                tracing::error!("Failed to install Ctrl+C handler");
            }
        }
        _ = shutdown.recv() => {}
    }
    tracing::info!("Shutdown signal received");
}
