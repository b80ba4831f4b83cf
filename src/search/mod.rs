//! Deferred search transition.

mod deferred;
mod intent;
mod reducer;
mod state;

pub use deferred::DeferredSearch;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;
