use std::collections::BTreeMap;

use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Change { rows } => SelectionState {
                selected: rows.into_iter().map(|row| (row.id, row)).collect(),
                all_selected: false,
            },
            SelectionIntent::SelectAll { rows, total_count } => {
                let mut selected = state.selected;
                selected.extend(rows.into_iter().map(|row| (row.id, row)));
                let all_selected = total_count > 0 && selected.len() as u64 == total_count;
                SelectionState {
                    selected,
                    all_selected,
                }
            }
            SelectionIntent::Toggle { row } => {
                let mut selected = state.selected;
                if selected.remove(&row.id).is_none() {
                    selected.insert(row.id, row);
                }
                SelectionState {
                    selected,
                    all_selected: false,
                }
            }
            SelectionIntent::Clear => SelectionState {
                selected: BTreeMap::new(),
                all_selected: false,
            },
        }
    }
}
