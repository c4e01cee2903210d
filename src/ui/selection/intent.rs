use crate::source::Artwork;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// The table reported a new selection. Replaces the set.
    Change { rows: Vec<Artwork> },
    /// Header checkbox: add every row in `rows`.
    SelectAll { rows: Vec<Artwork>, total_count: u64 },
    /// Flip one row.
    Toggle { row: Artwork },
    Clear,
}

impl Intent for SelectionIntent {}
