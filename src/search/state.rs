use crate::mvi::UiState;
use crate::optimistic::Item;

/// Search box state.
///
/// Each query change starts a new generation. Results are tagged with the
/// generation that requested them and only the newest generation's results
/// are shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Item>,
    pub generation: u64,
    /// Generation whose results are still outstanding.
    pub pending: Option<u64>,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
