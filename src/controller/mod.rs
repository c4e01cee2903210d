//! Debounced, lazily-paginated data fetching.

mod debounce;
mod fetch;

pub use debounce::DebounceTimer;
pub use fetch::FetchController;
