use crate::ui::mvi::Reducer;

use super::intent::ResultsIntent;
use super::state::ResultState;

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultState;
    type Intent = ResultsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultsIntent::Scheduled => ResultState {
                loading: true,
                ..state
            },
            ResultsIntent::Loaded { page } => ResultState {
                rows: page.data,
                total_count: page.pagination.total,
                loading: false,
                ..state
            },
            // Previous rows stay on screen under the error
            ResultsIntent::Failed { message } => ResultState {
                loading: false,
                error_message: Some(message),
                ..state
            },
            ResultsIntent::DismissError => ResultState {
                error_message: None,
                ..state
            },
        }
    }
}
