//! Shared bookkeeping for a single form action: at most one submission in
//! flight, state reduced through [`ActionReducer`].

use parking_lot::Mutex;

use crate::action::intent::ActionIntent;
use crate::action::reducer::ActionReducer;
use crate::action::state::{ActionInput, ActionOutcome, ActionState};
use crate::mvi::Reducer;

pub(crate) struct ActionSlot<I> {
    state: Mutex<ActionState<I>>,
}

impl<I: ActionInput> ActionSlot<I> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(ActionState::Idle),
        }
    }

    pub(crate) fn state(&self) -> ActionState<I> {
        self.state.lock().clone()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.state.lock().is_pending()
    }

    /// Move to pending with `input`. Returns `false` if a submission is
    /// already in flight.
    pub(crate) fn begin(&self, input: I) -> bool {
        let mut state = self.state.lock();
        if state.is_pending() {
            return false;
        }
        let current = std::mem::take(&mut *state);
        *state = ActionReducer::<I>::reduce(current, ActionIntent::Submit { input });
        true
    }

    pub(crate) fn finish(&self, outcome: ActionOutcome) {
        let mut state = self.state.lock();
        let current = std::mem::take(&mut *state);
        *state = ActionReducer::<I>::reduce(current, ActionIntent::Resolve { outcome });
    }
}
