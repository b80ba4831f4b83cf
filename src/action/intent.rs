use crate::action::state::{ActionInput, ActionOutcome};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ActionIntent<I> {
    /// User submitted the form.
    Submit { input: I },
    /// The in-flight submission finished.
    Resolve { outcome: ActionOutcome },
    Reset,
}

impl<I: ActionInput> Intent for ActionIntent<I> {}
