//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per API route.
//! When API routes or query parameters change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET any path, query string included
    pub async fn get(&self, path_and_query: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path_and_query))
            .send()
            .await
            .expect("Request failed")
    }

    async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Service Endpoints
    // ========================================================================

    /// GET /health
    pub async fn get_health(&self) -> Response {
        self.get("/health").await
    }

    /// GET /api/docs
    pub async fn get_docs(&self) -> Response {
        self.get("/api/docs").await
    }

    // ========================================================================
    // Song Endpoints
    // ========================================================================

    /// GET /api/songs
    pub async fn get_songs(&self, page: Option<&str>) -> Response {
        match page {
            Some(page) => self.get_with_query("/api/songs", &[("page", page)]).await,
            None => self.get("/api/songs").await,
        }
    }

    /// GET /api/search
    pub async fn search(&self, query: &[(&str, &str)]) -> Response {
        self.get_with_query("/api/search", query).await
    }

    /// GET /api/advanced-search
    pub async fn advanced_search(&self, query: &[(&str, &str)]) -> Response {
        self.get_with_query("/api/advanced-search", query).await
    }

    /// GET /api/genre/{genreName}
    pub async fn get_genre_songs(&self, genre: &str) -> Response {
        self.get(&format!("/api/genre/{}", genre)).await
    }

    /// GET /api/mood/{moodName}
    pub async fn get_mood_songs(&self, mood: &str) -> Response {
        self.get(&format!("/api/mood/{}", mood)).await
    }

    /// GET /api/random
    pub async fn get_random_songs(&self, count: Option<&str>) -> Response {
        match count {
            Some(count) => self.get_with_query("/api/random", &[("count", count)]).await,
            None => self.get("/api/random").await,
        }
    }

    // ========================================================================
    // Enumeration Endpoints
    // ========================================================================

    /// GET /api/genres
    pub async fn get_genres(&self) -> Response {
        self.get("/api/genres").await
    }

    /// GET /api/moods
    pub async fn get_moods(&self) -> Response {
        self.get("/api/moods").await
    }
}
