use crate::source::ArtworkPage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResultsIntent {
    /// A state change was recorded and a fetch is pending.
    Scheduled,
    /// The latest fetch succeeded.
    Loaded { page: ArtworkPage },
    /// The latest fetch failed.
    Failed { message: String },
    /// User acknowledged the error banner.
    DismissError,
}

impl Intent for ResultsIntent {}
