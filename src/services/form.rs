use crate::domain::{validate, ClientContext, ContactSubmission, FormFields};
use crate::presenter::Presenter;

use super::webhook::{SubmitError, WebhookClient};

pub const SUCCESS_MESSAGE: &str = "Thank you! We will be in touch soon.";
pub const VALIDATION_MESSAGE: &str = "Please complete all required fields.";
pub const FALLBACK_CONTACT_EMAIL: &str = "contact@example.com";

pub fn fallback_error_message() -> String {
    format!(
        "There was a problem sending your message. Please try again or write to us at {}.",
        FALLBACK_CONTACT_EMAIL
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Invalid,
    Failed,
    Ignored,
}

/// Drives one contact form: validates input, sends it through the
/// webhook client and reports the outcome via the presenter.
pub struct ContactForm<P: Presenter> {
    client: WebhookClient,
    presenter: P,
    state: FormState,
}

impl<P: Presenter> ContactForm<P> {
    pub fn new(client: WebhookClient, presenter: P) -> Self {
        ContactForm {
            client,
            presenter,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub async fn handle_submit(
        &mut self,
        fields: &FormFields,
        ctx: &ClientContext,
    ) -> SubmitOutcome {
        if self.state == FormState::Submitting {
            log::warn!("Ignoring submit while a submission is in flight");
            return SubmitOutcome::Ignored;
        }

        if !validate(fields) {
            self.presenter.show_error(VALIDATION_MESSAGE);
            return SubmitOutcome::Invalid;
        }

        let submission = ContactSubmission::build(fields, ctx);

        self.state = FormState::Submitting;
        self.presenter.set_busy(true);

        let outcome = match self.client.submit(&submission).await {
            Ok(response) if response.success => {
                self.presenter.show_success(SUCCESS_MESSAGE);
                self.presenter.reset_form();
                SubmitOutcome::Accepted
            }
            Ok(response) => {
                let reason = response
                    .message
                    .unwrap_or_else(|| "failed to send the form".to_string());
                log::error!("{}", SubmitError::Rejected(reason));
                self.presenter.show_error(&fallback_error_message());
                SubmitOutcome::Failed
            }
            Err(e) => {
                log::error!("Contact form submission failed: {}", e);
                self.presenter.show_error(&fallback_error_message());
                SubmitOutcome::Failed
            }
        };

        // The submit control comes back on every path.
        self.presenter.set_busy(false);
        self.state = FormState::Idle;

        outcome
    }
}
