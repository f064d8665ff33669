//! HTTP server subsystem.

pub mod cookies;
pub mod request;
pub mod server;

pub use server::AppState;
pub use server::HttpServer;
