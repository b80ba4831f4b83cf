use crate::mvi::UiState;

/// Values a form action can carry as its submitted input.
pub trait ActionInput: Clone + PartialEq + Send + 'static {}

impl<T: Clone + PartialEq + Send + 'static> ActionInput for T {}

/// How a submitted action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Accepted, with an optional confirmation to show.
    Succeeded { message: Option<String> },
    Rejected { message: String },
}

impl ActionOutcome {
    /// Text to show next to the form, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Succeeded { message } => message.as_deref(),
            ActionOutcome::Rejected { message } => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionState<I> {
    Idle,
    /// A submission is in flight. Further submissions are ignored.
    Pending { input: I },
    Done { input: I, outcome: ActionOutcome },
}

impl<I> Default for ActionState<I> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<I: ActionInput> UiState for ActionState<I> {}

impl<I> ActionState<I> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Message to show next to the form, if the last submission was rejected.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Done {
                outcome: ActionOutcome::Rejected { message },
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}
