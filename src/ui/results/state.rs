//! What the renderer shows: the current page and the fetch status.

use crate::source::Artwork;
use crate::ui::mvi::UiState;

/// Output of the fetch controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultState {
    /// Rows of the current page only.
    pub rows: Vec<Artwork>,
    /// Total across all pages, as reported by the last successful fetch.
    pub total_count: u64,
    pub loading: bool,
    /// Set on failure. Survives later successes until dismissed.
    pub error_message: Option<String>,
}

impl UiState for ResultState {}

impl ResultState {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
