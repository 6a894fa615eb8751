//! HTTP client for ncs.io.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::listing::parse_listing;
use super::tables::{default_genres, default_moods};
use crate::catalog::{CatalogError, CatalogProvider, Enumeration, SearchFilter, Song};

pub const DEFAULT_NCS_BASE_URL: &str = "https://ncs.io";

const USER_AGENT: &str = concat!("ncs-api-server/", env!("CARGO_PKG_VERSION"));

/// Catalog provider backed by the ncs.io website.
pub struct NcsClient {
    client: reqwest::Client,
    base_url: String,
    genres: Enumeration,
    moods: Enumeration,
}

impl NcsClient {
    /// Create a new client with the built-in genre and mood tables.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the website (e.g., "https://ncs.io")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            genres: default_genres(),
            moods: default_moods(),
        })
    }

    /// Replace the built-in tables. `None` keeps the current table.
    pub fn with_enumerations(
        mut self,
        genres: Option<Enumeration>,
        moods: Option<Enumeration>,
    ) -> Self {
        if let Some(genres) = genres {
            self.genres = genres;
        }
        if let Some(moods) = moods {
            self.moods = moods;
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ncs.io pages are 1-based.
    fn latest_url(&self, page: u32) -> String {
        format!("{}/music?page={}", self.base_url, page as u64 + 1)
    }

    fn search_url(&self, filter: &SearchFilter, page: u32) -> String {
        let id_param = |id: Option<u32>| id.map(|id| id.to_string()).unwrap_or_default();
        format!(
            "{}/music-search?q={}&genre={}&mood={}&page={}",
            self.base_url,
            urlencoding::encode(filter.query.as_deref().unwrap_or("")),
            id_param(filter.genre),
            id_param(filter.mood),
            page as u64 + 1
        )
    }

    async fn fetch_listing(&self, url: String) -> Result<Vec<Song>, CatalogError> {
        debug!("Fetching listing {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status(),
                url,
            });
        }

        let body = response.text().await?;
        let songs = parse_listing(&body, &self.base_url)?;
        debug!("Got {} songs from {}", songs.len(), url);
        Ok(songs)
    }
}

#[async_trait]
impl CatalogProvider for NcsClient {
    async fn fetch_latest(&self, page: u32) -> Result<Vec<Song>, CatalogError> {
        self.fetch_listing(self.latest_url(page)).await
    }

    async fn search(&self, filter: &SearchFilter, page: u32) -> Result<Vec<Song>, CatalogError> {
        self.fetch_listing(self.search_url(filter, page)).await
    }

    fn genres(&self) -> Option<&Enumeration> {
        Some(&self.genres)
    }

    fn moods(&self) -> Option<&Enumeration> {
        Some(&self.moods)
    }
}
