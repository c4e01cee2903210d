use std::num::NonZeroU32;

use crate::ui::mvi::Intent;

use super::field::Field;
use super::state::{Filters, SortOrder};

/// Interactions that replace the lazy state.
#[derive(Debug, Clone, PartialEq)]
pub enum TableIntent {
    /// Paginator moved. `page` is recomputed from `offset`.
    PageChange { offset: u64, page_size: NonZeroU32 },
    /// Column header clicked. Offset is left alone.
    SortChange {
        sort_field: Option<Field>,
        sort_order: SortOrder,
    },
    /// Filter row edited. Always returns to the first page.
    FilterChange { filters: Filters },
}

impl Intent for TableIntent {}
