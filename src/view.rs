//! State behind one rendering of the sign-in page.

use crate::auth::{authenticate, LoginError};
use crate::models::{CredentialRecord, FormField, FormState};
use crate::portal::Portal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Editing,
    SubmittedError,
    SubmittedSuccess,
}

/// Emitted when a submission passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
    pub username: String,
    pub remember_me: bool,
    pub account: Option<CredentialRecord>,
}

impl Acknowledgment {
    /// Developer-facing notice mirroring the acknowledgment
    pub fn log(&self) {
        tracing::info!(
            username = %self.username,
            remember_me = self.remember_me,
            role = ?self.account.as_ref().map(|a| a.role.as_str()),
            "Login successful"
        );
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    form: FormState,
    password_visible: bool,
    error: String,
    failure: Option<LoginError>,
    phase: Phase,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the view a page was rendered from
    pub fn restore(form: FormState, password_visible: bool, failure: Option<LoginError>) -> Self {
        let phase = match failure {
            Some(_) => Phase::SubmittedError,
            None if form == FormState::default() => Phase::Idle,
            None => Phase::Editing,
        };
        Self {
            form,
            password_visible,
            error: failure.map(|e| e.to_string()).unwrap_or_default(),
            failure,
            phase,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Current error text, empty when there is none
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn failure(&self) -> Option<LoginError> {
        self.failure
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn edit(&mut self, field: FormField) {
        self.form = self.form.with(field);
        self.error.clear();
        self.failure = None;
        self.phase = Phase::Editing;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validate the form against `portal`.
    ///
    /// On failure the error message is set and `None` returned. On success
    /// the form is left as typed and the acknowledgment is returned.
    pub fn submit(&mut self, portal: &Portal) -> Option<Acknowledgment> {
        match authenticate(&self.form, portal.credentials()) {
            Ok(outcome) => {
                let ack = Acknowledgment {
                    message: portal.acknowledge(&outcome),
                    username: self.form.username.clone(),
                    remember_me: self.form.remember_me,
                    account: outcome.record().cloned(),
                };
                self.phase = Phase::SubmittedSuccess;
                Some(ack)
            }
            Err(e) => {
                self.error = e.to_string();
                self.failure = Some(e);
                self.phase = Phase::SubmittedError;
                None
            }
        }
    }
}
