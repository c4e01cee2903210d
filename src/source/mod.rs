//! Remote data source: the paginated artworks endpoint.

mod client;
mod error;
mod types;

use async_trait::async_trait;

pub use client::ArtworksClient;
pub use error::{ClientError, FetchError, FETCH_FAILED_MESSAGE};
pub use types::{Artwork, ArtworkPage, PageRequest, Pagination, THUMBNAIL_WIDTH};

/// Anything that can serve one page of artworks.
///
/// The fetch controller only ever sends `(page, limit)`; sort and filter
/// state stay on the client.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError>;
}
