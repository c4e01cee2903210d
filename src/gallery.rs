//! The artworks table component: lazy state, selection and fetching wired
//! together behind the operations a presentation layer calls.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::config::TableConfig;
use crate::controller::FetchController;
use crate::source::{Artwork, DataSource};
use crate::ui::mvi::Reducer;
use crate::ui::results::ResultState;
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};
use crate::ui::table::{
    Field, FilterMeta, Filters, LazyState, SortOrder, TableIntent, TableReducer,
};

/// A mounted artworks table.
///
/// Mounting schedules the first fetch. Every table interaction replaces the
/// lazy state and reschedules; selection changes never trigger a fetch.
/// Must be created and driven from within a tokio runtime.
pub struct Gallery<S: DataSource> {
    lazy: watch::Sender<LazyState>,
    selection: SelectionState,
    controller: FetchController<S>,
}

impl<S: DataSource> Gallery<S> {
    pub fn mount(source: Arc<S>, config: &TableConfig) -> Self {
        Self::mount_with(
            source,
            LazyState::with_page_size(config.page_size()),
            config.debounce(),
        )
    }

    pub fn mount_with(source: Arc<S>, initial: LazyState, debounce: Duration) -> Self {
        let mut controller = FetchController::new(source, debounce);
        controller.schedule(&initial);
        let (lazy, _) = watch::channel(initial);

        tracing::debug!(debounce_ms = debounce.as_millis() as u64, "Gallery mounted");

        Self {
            lazy,
            selection: SelectionState::default(),
            controller,
        }
    }

    pub fn lazy_state(&self) -> LazyState {
        self.lazy.borrow().clone()
    }

    pub fn subscribe_lazy_state(&self) -> watch::Receiver<LazyState> {
        self.lazy.subscribe()
    }

    pub fn results(&self) -> ResultState {
        self.controller.results()
    }

    pub fn subscribe_results(&self) -> watch::Receiver<ResultState> {
        self.controller.subscribe()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn on_page_change(&mut self, offset: u64, page_size: NonZeroU32) {
        self.dispatch(TableIntent::PageChange { offset, page_size });
    }

    /// Jump to a 1-based page, keeping the page size.
    pub fn go_to_page(&mut self, page: u64) {
        let page_size = self.lazy.borrow().page_size;
        self.on_page_change(LazyState::offset_for(page, page_size), page_size);
    }

    pub fn on_sort_change(&mut self, sort_field: Option<Field>, sort_order: SortOrder) {
        self.dispatch(TableIntent::SortChange {
            sort_field,
            sort_order,
        });
    }

    pub fn on_filter_change(&mut self, filters: Filters) {
        self.dispatch(TableIntent::FilterChange { filters });
    }

    /// Replace one column's filter text, keeping the others.
    pub fn set_filter(&mut self, field: Field, value: impl Into<String>) {
        let filters = self
            .lazy
            .borrow()
            .filters
            .clone()
            .with(field, FilterMeta::contains(value));
        self.on_filter_change(filters);
    }

    pub fn clear_filters(&mut self) {
        self.on_filter_change(Filters::default());
    }

    pub fn on_selection_change(&mut self, rows: Vec<Artwork>) {
        self.select(SelectionIntent::Change { rows });
    }

    /// Select every row of the current page.
    pub fn select_all(&mut self) {
        let results = self.controller.results();
        self.select(SelectionIntent::SelectAll {
            rows: results.rows,
            total_count: results.total_count,
        });
    }

    pub fn toggle_row(&mut self, row: Artwork) {
        self.select(SelectionIntent::Toggle { row });
    }

    pub fn clear_selection(&mut self) {
        self.select(SelectionIntent::Clear);
    }

    pub fn dismiss_error(&self) {
        self.controller.dismiss_error();
    }

    /// Tear down: a pending fetch is cancelled and late results are ignored.
    pub fn unmount(mut self) {
        self.controller.unmount();
    }

    fn dispatch(&mut self, intent: TableIntent) {
        let next = TableReducer::reduce(self.lazy_state(), intent);
        self.lazy.send_replace(next.clone());
        self.controller.schedule(&next);
    }

    fn select(&mut self, intent: SelectionIntent) {
        let previous = std::mem::take(&mut self.selection);
        self.selection = SelectionReducer::reduce(previous, intent);
        tracing::debug!(
            selected = self.selection.len(),
            all_selected = self.selection.all_selected(),
            "Selection changed"
        );
    }
}
