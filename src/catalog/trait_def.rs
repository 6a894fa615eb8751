//! CatalogProvider trait definition.

use async_trait::async_trait;

use super::{CatalogError, Enumeration, SearchFilter, Song};

/// Trait for song catalog backends.
///
/// Every call is a single attempt against the backend. Implementations must
/// not mutate the genre and mood tables once constructed, handlers read them
/// concurrently without locking.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Get a page of the latest released songs. Pages are 0-based.
    async fn fetch_latest(&self, page: u32) -> Result<Vec<Song>, CatalogError>;

    /// Search the catalog. Absent filter fields are not applied.
    async fn search(&self, filter: &SearchFilter, page: u32) -> Result<Vec<Song>, CatalogError>;

    /// The genre name to filter-id table, if this backend supports genres.
    fn genres(&self) -> Option<&Enumeration>;

    /// The mood name to filter-id table, if this backend supports moods.
    fn moods(&self) -> Option<&Enumeration>;
}
