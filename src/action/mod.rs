//! Form actions: a submit with an in-flight flag and the outcome of the
//! last submission.

mod form;
mod intent;
mod name;
mod reducer;
mod slot;
mod state;

pub use form::{
    ContactForm, FormAction, FormHandler, SimulatedHandler, SubmitFailed, SUBMIT_FAILED,
    SUBMIT_SUCCEEDED,
};
pub use intent::ActionIntent;
pub use name::NameAction;
pub use reducer::ActionReducer;
pub use state::{ActionInput, ActionOutcome, ActionState};
