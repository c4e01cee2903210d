use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::table::DEFAULT_PAGE_SIZE;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
}

/// Where the artworks come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API; `/artworks` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the IIIF image server used for thumbnails.
    #[serde(default = "default_iiif_base_url")]
    pub iiif_base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Table behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page on mount (default: 12).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Quiet period before a state change turns into a request (default: 400).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl TableConfig {
    /// Page size as a non-zero value. Falls back to the default for 0,
    /// which `Config::validate` rejects anyway.
    pub fn page_size(&self) -> NonZeroU32 {
        NonZeroU32::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_base_url() -> String {
    "https://api.artic.edu/api/v1".to_string()
}

fn default_iiif_base_url() -> String {
    "https://www.artic.edu/iiif/2".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE.get()
}

fn default_debounce_ms() -> u64 {
    400
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            iiif_base_url: default_iiif_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
