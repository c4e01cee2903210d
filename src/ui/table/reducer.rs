use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::state::LazyState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = LazyState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::PageChange { offset, page_size } => LazyState {
                offset,
                page_size,
                page: LazyState::page_for(offset, page_size),
                ..state
            },
            TableIntent::SortChange {
                sort_field,
                sort_order,
            } => LazyState {
                sort_field,
                sort_order,
                ..state
            },
            // A new filter invalidates whatever page the user was on
            TableIntent::FilterChange { filters } => LazyState {
                filters,
                offset: 0,
                page: 1,
                ..state
            },
        }
    }
}
