//! NCS API Server Library
//!
//! Exposes the catalog provider, configuration and HTTP server modules for
//! the binary and for the end-to-end tests.

pub mod catalog;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::ncs::NcsClient;
pub use catalog::{CatalogError, CatalogProvider, SearchFilter, Song};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
