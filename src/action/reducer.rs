use std::marker::PhantomData;

use crate::action::intent::ActionIntent;
use crate::action::state::{ActionInput, ActionState};
use crate::mvi::Reducer;

pub struct ActionReducer<I>(PhantomData<I>);

impl<I: ActionInput> Reducer for ActionReducer<I> {
    type State = ActionState<I>;
    type Intent = ActionIntent<I>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ActionIntent::Submit { input } => match state {
                // Submit button is disabled while pending
                pending @ ActionState::Pending { .. } => pending,
                _ => ActionState::Pending { input },
            },
            ActionIntent::Resolve { outcome } => match state {
                ActionState::Pending { input } => ActionState::Done { input, outcome },
                // Nothing in flight: stale resolution
                other => other,
            },
            ActionIntent::Reset => match state {
                pending @ ActionState::Pending { .. } => pending,
                _ => ActionState::Idle,
            },
        }
    }
}
