use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request to catalog provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog provider responded with status {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Could not parse catalog listing: {0}")]
    Parse(String),
}
