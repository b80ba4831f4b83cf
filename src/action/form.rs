//! Contact form (name + email) submitted through a server action.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::slot::ActionSlot;
use crate::action::state::{ActionOutcome, ActionState};

pub const SUBMIT_SUCCEEDED: &str = "Form submitted successfully!";
pub const SUBMIT_FAILED: &str = "Failed to submit form.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Error)]
#[error("Form submission failed: {reason}")]
pub struct SubmitFailed {
    pub reason: String,
}

/// Server side of the form.
#[async_trait]
pub trait FormHandler: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitFailed>;
}

/// Accepts every form after a fixed delay.
pub struct SimulatedHandler {
    latency: Duration,
}

impl SimulatedHandler {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl FormHandler for SimulatedHandler {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitFailed> {
        tokio::time::sleep(self.latency).await;
        tracing::info!(name = %form.name, email = %form.email, "Form submitted");
        Ok(())
    }
}

/// Form action over a [`FormHandler`].
///
/// Success shows [`SUBMIT_SUCCEEDED`]; any handler failure shows
/// [`SUBMIT_FAILED`] and is only logged in detail.
pub struct FormAction<H> {
    handler: H,
    slot: ActionSlot<ContactForm>,
}

impl<H: FormHandler> FormAction<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            slot: ActionSlot::new(),
        }
    }

    pub fn state(&self) -> ActionState<ContactForm> {
        self.slot.state()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_pending()
    }

    /// Submit `form`. Returns `None` when another submission is already
    /// pending and this one was ignored.
    pub async fn submit(&self, form: ContactForm) -> Option<ActionOutcome> {
        if !self.slot.begin(form.clone()) {
            tracing::debug!(name = %form.name, "Submission ignored, action pending");
            return None;
        }

        let outcome = match self.handler.submit(&form).await {
            Ok(()) => ActionOutcome::Succeeded {
                message: Some(SUBMIT_SUCCEEDED.to_string()),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Action failed");
                ActionOutcome::Rejected {
                    message: SUBMIT_FAILED.to_string(),
                }
            }
        };

        self.slot.finish(outcome.clone());
        Some(outcome)
    }
}

impl FormAction<SimulatedHandler> {
    pub fn simulated(latency: Duration) -> Self {
        Self::new(SimulatedHandler::new(latency))
    }
}
