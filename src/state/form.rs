//! Submission lifecycle shared by the login and signup forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both auth screens drive the same phase sequence: a submit enters
//! validation, passing validation puts a request in flight, and the
//! remote response lands in success or error. The busy phase doubles as
//! the single-flight guard — the submit control is disabled while a
//! request is outstanding, so no second request can start.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Phase of the current submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing in progress; fields are editable.
    #[default]
    Idle,
    /// A submit is being checked locally.
    Validating,
    /// The request is in flight; submit is disabled.
    Submitting,
    /// The remote accepted the submission.
    Success,
    /// Local validation or the remote rejected the attempt.
    Error,
}

/// Per-view submission status: the current phase plus user-visible
/// messages. Reset at the start of every attempt and on field edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub phase: FormPhase,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl FormStatus {
    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    /// Start a fresh attempt: clears stale messages, enters validation.
    pub fn begin_attempt(&mut self) {
        self.phase = FormPhase::Validating;
        self.error = None;
        self.notice = None;
    }

    /// Local validation failed; no request goes out for this attempt.
    pub fn reject_local(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Error;
        self.error = Some(message.into());
    }

    /// Local validation passed; the request is now in flight.
    pub fn begin_request(&mut self) {
        self.phase = FormPhase::Submitting;
    }

    /// The remote accepted the submission.
    pub fn succeed(&mut self, notice: impl Into<String>) {
        self.phase = FormPhase::Success;
        self.error = None;
        self.notice = Some(notice.into());
    }

    /// The request failed; the message is rendered as-is.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Error;
        self.error = Some(message.into());
    }

    /// A field was edited, so messages from the previous attempt are
    /// stale. An errored form returns to idle.
    pub fn clear_on_edit(&mut self) {
        if matches!(self.phase, FormPhase::Error) {
            self.phase = FormPhase::Idle;
        }
        self.error = None;
        self.notice = None;
    }
}
