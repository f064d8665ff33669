//! Probe handlers.
//!
//! Each submodule covers one aspect of ingress behavior under test. Every
//! handler is a stateless reflection of request data or a canned response;
//! the heavy lifting (affinity, CORS, security headers) happens in the
//! ingress layer in front of this service, never here.
//!
//! Response field names, including the Korean keys of the original
//! deployments, are kept verbatim — test suites scrape them.

pub mod cors;
pub mod info;
pub mod redirects;
pub mod security;
pub mod session;
pub mod timeout;
pub mod upload;

/// Sentinel reported when a probed cookie or header is absent.
pub const ABSENT: &str = "없음";
