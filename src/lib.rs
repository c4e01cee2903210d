//! Lazily-paginated, sortable, filterable artworks table backed by the
//! Art Institute of Chicago REST API.
//!
//! [`Gallery`] is the entry point: mount it with a [`source::DataSource`],
//! drive it with table interactions, and read or subscribe to its results.

pub mod config;
pub mod controller;
pub mod gallery;
pub mod logging;
pub mod source;
pub mod ui;

pub use gallery::Gallery;
