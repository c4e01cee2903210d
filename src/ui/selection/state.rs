//! Rows the user has picked, independent of which page is showing.

use std::collections::BTreeMap;

use crate::source::Artwork;
use crate::ui::mvi::UiState;

/// Selection keyed by artwork id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub(super) selected: BTreeMap<u64, Artwork>,
    pub(super) all_selected: bool,
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains_key(&id)
    }

    /// Selected rows ordered by id.
    pub fn rows(&self) -> impl Iterator<Item = &Artwork> {
        self.selected.values()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.selected.keys().copied().collect()
    }

    /// True only after an explicit select-all that covered every record.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }
}
