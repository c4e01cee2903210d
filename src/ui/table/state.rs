//! Lazy-loading state of the table: which page, in which order, filtered how.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

use super::field::Field;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(12) {
    Some(size) => size,
    None => unreachable!(),
};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
    #[default]
    None,
}

/// How a filter value is compared against a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Substring containment.
    #[default]
    Contains,
}

/// A single column predicate. An empty value matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterMeta {
    pub value: String,
    pub match_mode: MatchMode,
}

impl FilterMeta {
    pub fn contains(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            match_mode: MatchMode::Contains,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Per-column filters. One slot per [`Field`], so no entry can go missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    pub id: FilterMeta,
    pub title: FilterMeta,
    pub artist_display: FilterMeta,
}

impl Filters {
    pub fn get(&self, field: Field) -> &FilterMeta {
        match field {
            Field::Id => &self.id,
            Field::Title => &self.title,
            Field::ArtistDisplay => &self.artist_display,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut FilterMeta {
        match field {
            Field::Id => &mut self.id,
            Field::Title => &mut self.title,
            Field::ArtistDisplay => &mut self.artist_display,
        }
    }

    /// Replaces `field` and returns the filters.
    pub fn with(mut self, field: Field, meta: FilterMeta) -> Self {
        *self.get_mut(field) = meta;
        self
    }

    /// Columns with a non-empty predicate.
    pub fn active(&self) -> impl Iterator<Item = (Field, &FilterMeta)> {
        Field::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, meta)| !meta.is_empty())
    }
}

/// Pagination, sort and filter state driving lazy fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyState {
    /// Index of the first row on the current page.
    pub offset: u64,
    pub page_size: NonZeroU32,
    /// 1-based page number, always `offset / page_size + 1`.
    pub page: u64,
    pub sort_field: Option<Field>,
    pub sort_order: SortOrder,
    pub filters: Filters,
}

impl UiState for LazyState {}

impl Default for LazyState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl LazyState {
    pub fn with_page_size(page_size: NonZeroU32) -> Self {
        Self {
            offset: 0,
            page_size,
            page: 1,
            sort_field: None,
            sort_order: SortOrder::None,
            filters: Filters::default(),
        }
    }

    /// Page number that contains `offset`.
    pub fn page_for(offset: u64, page_size: NonZeroU32) -> u64 {
        (offset / u64::from(page_size.get())).saturating_add(1)
    }

    /// Offset of the first row on a 1-based `page`. Page 0 is treated as page 1.
    pub fn offset_for(page: u64, page_size: NonZeroU32) -> u64 {
        page.saturating_sub(1)
            .saturating_mul(u64::from(page_size.get()))
    }

    /// Page number derived from the current offset.
    pub fn current_page(&self) -> u64 {
        Self::page_for(self.offset, self.page_size)
    }
}
