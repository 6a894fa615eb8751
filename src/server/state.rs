use axum::extract::FromRef;

use crate::catalog::CatalogProvider;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalogProvider = Arc<dyn CatalogProvider>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedCatalogProvider,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog: GuardedCatalogProvider) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogProvider {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}
