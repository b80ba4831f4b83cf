//! Search-as-you-type where the remote lookup runs as a background
//! transition: the query updates immediately, results follow later.

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::mvi::Reducer;
use crate::remote::ItemsApi;
use crate::search::intent::SearchIntent;
use crate::search::reducer::SearchReducer;
use crate::search::state::SearchState;

pub struct DeferredSearch<A> {
    api: A,
    state: Mutex<SearchState>,
    updates: watch::Sender<SearchState>,
}

impl<A: ItemsApi> DeferredSearch<A> {
    pub fn new(api: A) -> Self {
        let (updates, _) = watch::channel(SearchState::default());
        Self {
            api,
            state: Mutex::new(SearchState::default()),
            updates,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.updates.subscribe()
    }

    /// Update the query and look it up.
    ///
    /// Returns `true` if this lookup's results were shown, `false` if a newer
    /// query superseded it first. A failed lookup shows an empty list.
    pub async fn set_query(&self, query: &str) -> bool {
        let generation = self.dispatch(SearchIntent::QueryChanged {
            query: query.to_string(),
        });

        let results = match self.api.list(Some(query)).await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(query, kind = err.kind(), error = %err, "Search failed, showing no results");
                Vec::new()
            }
        };
        let count = results.len();

        let current = self.dispatch(SearchIntent::ResultsArrived {
            generation,
            results,
        });

        let shown = current == generation;
        if shown {
            tracing::debug!(query, count, "Search results shown");
        } else {
            tracing::debug!(query, generation, current, "Stale search results dropped");
        }
        shown
    }

    /// Reduce `intent` and publish; returns the resulting generation.
    fn dispatch(&self, intent: SearchIntent) -> u64 {
        let next = {
            let mut state = self.state.lock();
            let current = std::mem::take(&mut *state);
            *state = SearchReducer::reduce(current, intent);
            state.clone()
        };
        let generation = next.generation;
        self.updates.send_replace(next);
        generation
    }
}
