use thiserror::Error;

/// Simulated network latency for the contact form, in milliseconds.
pub const SUBMIT_DELAY_MS: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
    #[error("submission already in progress")]
    AlreadySubmitting,
}

/// Contact form state. The submission itself is a stand-in: a fixed delay
/// followed by [`ContactForm::finish_submit`], with no I/O anywhere.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Idle → Submitting, guarded on every required field being non-blank.
    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Submitting → Idle once the simulated delay elapses. Clears every
    /// field so the form is ready for another message.
    pub fn finish_submit(&mut self) {
        if !self.is_submitting() {
            return;
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.phase = SubmitPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something.".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn full_submission_cycle_clears_fields() {
        let mut form = filled();
        assert_eq!(form.phase(), SubmitPhase::Idle);

        form.begin_submit().unwrap();
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        // fields keep their values while the simulated send is in flight
        assert_eq!(form.name, "Ada Lovelace");

        form.finish_submit();
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn blank_required_fields_refuse_submission() {
        let mut form = filled();
        form.name = String::new();
        assert_eq!(form.begin_submit(), Err(FormError::MissingName));
        assert_eq!(form.phase(), SubmitPhase::Idle);

        let mut form = filled();
        form.email = "   ".to_string();
        assert_eq!(form.begin_submit(), Err(FormError::MissingEmail));
        assert_eq!(form.phase(), SubmitPhase::Idle);

        let mut form = filled();
        form.message = String::new();
        assert_eq!(form.begin_submit(), Err(FormError::MissingMessage));
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn resubmit_while_in_flight_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert_eq!(form.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn finish_without_begin_is_a_no_op() {
        let mut form = filled();
        form.finish_submit();
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.name, "Ada Lovelace");
    }
}
