//! Wire types of the artworks endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Width in pixels of the thumbnails shown in the table.
pub const THUMBNAIL_WIDTH: u32 = 100;

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default)]
    pub image_id: Option<String>,
}

impl Artwork {
    /// IIIF thumbnail URL, or `None` for artworks without an image.
    pub fn thumbnail_url(&self, iiif_base_url: &str, width: u32) -> Option<String> {
        let image_id = self.image_id.as_deref().filter(|id| !id.is_empty())?;
        Some(format!(
            "{}/{}/full/{},/0/default.jpg",
            iiif_base_url.trim_end_matches('/'),
            image_id,
            width
        ))
    }
}

/// Pagination block of a page response. Only `total` is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

/// A decoded page: `{ data: [...], pagination: { total, ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// What the fetch controller asks the data source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    pub limit: u32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
