//! Client-side state of the artworks table.
//!
//! Each concern lives in its own MVI triple (state, intent, reducer):
//! - [`table`]: pagination, sort and filter ("lazy state")
//! - [`selection`]: rows picked by the user
//! - [`results`]: what the last fetch produced

pub mod mvi;
pub mod results;
pub mod selection;
pub mod table;
