//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → env overrides (CONTROLLER_NAME)
//!     → ProbeConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it cannot change within a process lifetime
//! - All fields have defaults so the binary runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks
//! - The controller name is resolved once at startup, not per request

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DashboardMode;
pub use schema::ListenerConfig;
pub use schema::ProbeConfig;
