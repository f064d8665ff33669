//! Ingress Diagnostic Backend Library

pub mod config;
pub mod dashboard;
pub mod http;
pub mod lifecycle;
pub mod probes;

pub use config::schema::ProbeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
