mod file_config;

pub use file_config::FileConfig;

use crate::catalog::ncs::DEFAULT_NCS_BASE_URL;
use crate::catalog::Enumeration;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_NCS_TIMEOUT_SEC: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub bind_address: Option<IpAddr>,
    pub logging_level: RequestsLoggingLevel,
    pub ncs_base_url: Option<String>,
    pub ncs_timeout_sec: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub bind_address: IpAddr,
    pub logging_level: RequestsLoggingLevel,
    pub ncs_base_url: String,
    pub ncs_timeout_sec: u64,

    // None keeps the provider's built-in table
    pub genres: Option<Enumeration>,
    pub moods: Option<Enumeration>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let bind_address = match file.bind_address {
            Some(address) => address
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid bind_address in config file: {:?}", address))?,
            None => cli.bind_address.unwrap_or(DEFAULT_BIND_ADDRESS),
        };

        let logging_level = match file.logging_level {
            Some(level) => match parse_logging_level(&level) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {:?}", level),
            },
            None => cli.logging_level.clone(),
        };

        let ncs_base_url = file
            .ncs_base_url
            .or_else(|| cli.ncs_base_url.clone())
            .unwrap_or_else(|| DEFAULT_NCS_BASE_URL.to_string());
        let ncs_base_url = ncs_base_url.trim().trim_end_matches('/').to_string();
        if ncs_base_url.is_empty() {
            bail!("ncs_base_url must not be empty");
        }
        if !ncs_base_url.starts_with("http://") && !ncs_base_url.starts_with("https://") {
            bail!("ncs_base_url must be an http(s) URL: {:?}", ncs_base_url);
        }

        let ncs_timeout_sec = file
            .ncs_timeout_sec
            .or(cli.ncs_timeout_sec)
            .unwrap_or(DEFAULT_NCS_TIMEOUT_SEC);
        if ncs_timeout_sec == 0 {
            bail!("ncs_timeout_sec must be greater than 0");
        }

        let genres = file.genres.map(Enumeration::from_map);
        if genres.as_ref().is_some_and(Enumeration::is_empty) {
            bail!("[genres] table in config file has no usable entries");
        }
        let moods = file.moods.map(Enumeration::from_map);
        if moods.as_ref().is_some_and(Enumeration::is_empty) {
            bail!("[moods] table in config file has no usable entries");
        }

        Ok(Self {
            port,
            bind_address,
            logging_level,
            ncs_base_url,
            ncs_timeout_sec,
            genres,
            moods,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
