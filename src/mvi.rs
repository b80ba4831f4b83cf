//! Model-View-Intent (MVI) primitives.
//!
//! Every async-state primitive in this crate is a reducer over a plain
//! state value. Presentation code renders the state and turns user input
//! into intents; drivers feed resolved remote calls back in as intents.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for intents: user actions or resolved remote calls.
pub trait Intent: Send + 'static {}

/// Marker trait for state snapshots handed to the view.
///
/// States are cloned to produce new states and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduce a sequence of intents in order, starting from `state`.
    fn fold<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
