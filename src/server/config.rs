use std::net::{IpAddr, SocketAddr};

use super::RequestsLoggingLevel;
use crate::config::{AppConfig, DEFAULT_BIND_ADDRESS, DEFAULT_PORT};

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: DEFAULT_BIND_ADDRESS,
            port: DEFAULT_PORT,
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            bind_address: config.bind_address,
            port: config.port,
        }
    }
}
