//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod scripted_source;

use std::net::TcpListener;
use std::time::Duration;

use artgrid::source::{Artwork, ArtworkPage, Pagination};

/// Debounce delay used by controller tests.
pub const DEBOUNCE: Duration = Duration::from_millis(400);

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn artwork(id: u64) -> Artwork {
    Artwork {
        id,
        title: format!("Artwork {id}"),
        artist_display: format!("Artist {id}\nFrance, 1840-1926"),
        image_id: (id % 2 == 0).then(|| format!("img-{id}")),
    }
}

/// A page with rows `first_id..first_id + len` out of `total`.
pub fn page(first_id: u64, len: u64, total: u64) -> ArtworkPage {
    ArtworkPage {
        data: (first_id..first_id + len).map(artwork).collect(),
        pagination: Pagination {
            total,
            limit: Some(len),
            ..Pagination::default()
        },
    }
}

pub fn ids(rows: &[Artwork]) -> Vec<u64> {
    rows.iter().map(|row| row.id).collect()
}

/// Sleep past one debounce window so the pending fetch fires and resolves.
pub async fn settle() {
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
}
