pub mod config;
pub mod docs;
mod enumerations;
pub mod envelope;
mod http_layers;
mod params;
#[allow(clippy::module_inception)]
pub mod server;
mod songs;
pub mod state;

pub use config::ServerConfig;
pub use envelope::{ApiError, Envelope};
pub use http_layers::*;
pub use server::{make_app, run_server};
