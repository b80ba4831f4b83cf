//! "Change name" form action with a simulated server round trip.

use std::time::Duration;

use crate::action::slot::ActionSlot;
use crate::action::state::{ActionOutcome, ActionState};

const MIN_NAME_LEN: usize = 3;

/// Submits a new display name.
///
/// Names shorter than three characters are rejected immediately; accepted
/// names resolve after the configured latency.
pub struct NameAction {
    latency: Duration,
    slot: ActionSlot<String>,
}

impl NameAction {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            slot: ActionSlot::new(),
        }
    }

    pub fn state(&self) -> ActionState<String> {
        self.slot.state()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_pending()
    }

    /// Submit `name`. Returns `None` when another submission is already
    /// pending and this one was ignored.
    pub async fn submit(&self, name: &str) -> Option<ActionOutcome> {
        if !self.slot.begin(name.to_string()) {
            tracing::debug!(name, "Submission ignored, action pending");
            return None;
        }

        let outcome = self.update_name(name).await;
        match &outcome {
            ActionOutcome::Succeeded { .. } => tracing::info!(name, "Name updated"),
            ActionOutcome::Rejected { message } => tracing::info!(name, %message, "Name rejected"),
        }

        self.slot.finish(outcome.clone());
        Some(outcome)
    }

    async fn update_name(&self, name: &str) -> ActionOutcome {
        if let Some(message) = validate_name(name) {
            return ActionOutcome::Rejected { message };
        }
        tokio::time::sleep(self.latency).await;
        ActionOutcome::Succeeded { message: None }
    }
}

fn validate_name(name: &str) -> Option<String> {
    if name.chars().count() < MIN_NAME_LEN {
        return Some(format!(
            "Name must be at least {} characters long",
            MIN_NAME_LEN
        ));
    }
    None
}
