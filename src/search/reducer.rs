use crate::mvi::Reducer;
use crate::search::intent::SearchIntent;
use crate::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::QueryChanged { query } => {
                let generation = state.generation + 1;
                SearchState {
                    query,
                    // Keep showing the previous results until new ones land
                    results: state.results,
                    generation,
                    pending: Some(generation),
                }
            }
            SearchIntent::ResultsArrived {
                generation,
                results,
            } => {
                if generation != state.generation {
                    return state;
                }
                SearchState {
                    results,
                    pending: None,
                    ..state
                }
            }
        }
    }
}
