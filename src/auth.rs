use crate::models::{CredentialRecord, FormField, FormState, Role};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both username and password")]
    MissingField,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl LoginError {
    /// Stable name used to carry the error across a page round-trip
    pub fn code(&self) -> &'static str {
        match self {
            LoginError::MissingField => "missing_field",
            LoginError::InvalidCredentials => "invalid_credentials",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "missing_field" => Some(LoginError::MissingField),
            "invalid_credentials" => Some(LoginError::InvalidCredentials),
            _ => None,
        }
    }
}

/// Fixed, read-only table of demo accounts
#[derive(Debug, Clone)]
pub struct CredentialStore {
    records: Vec<CredentialRecord>,
}

impl CredentialStore {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// The two accounts shown on the demo portal
    pub fn demo() -> Self {
        Self::new(vec![
            CredentialRecord {
                id: 1,
                username: "teacher@vocalink.com",
                password: "teacher123",
                role: Role::Teacher,
                name: "Ms. Johnson",
            },
            CredentialRecord {
                id: 2,
                username: "admin@vocalink.com",
                password: "admin123",
                role: Role::Admin,
                name: "Mr. Rivera",
            },
        ])
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// First record whose username and password both match exactly
    pub fn find(&self, username: &str, password: &str) -> Option<&CredentialRecord> {
        self.records
            .iter()
            .find(|record| record.username == username && record.password == password)
    }
}

/// Result of a submission that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// No store configured, any non-empty pair is accepted
    Accepted { username: &'a str },
    Matched(&'a CredentialRecord),
}

impl Outcome<'_> {
    pub fn record(&self) -> Option<&CredentialRecord> {
        match self {
            Outcome::Matched(record) => Some(*record),
            Outcome::Accepted { .. } => None,
        }
    }
}

/// Check presence of both fields, then match against `store` if there is one
pub fn authenticate<'a>(
    form: &'a FormState,
    store: Option<&'a CredentialStore>,
) -> Result<Outcome<'a>, LoginError> {
    if form.username.is_empty() || form.password.is_empty() {
        return Err(LoginError::MissingField);
    }

    match store {
        None => Ok(Outcome::Accepted {
            username: &form.username,
        }),
        Some(store) => store
            .find(&form.username, &form.password)
            .map(Outcome::Matched)
            .ok_or(LoginError::InvalidCredentials),
    }
}

/// What the sign-in form posts back.
///
/// The `prev_*` and `error` fields echo the state the page was rendered
/// from, so only fields the user actually changed count as edits.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Checkbox, present only when ticked
    pub remember_me: Option<String>,
    pub show_password: Option<String>,
    pub action: Option<String>,
    pub prev_username: Option<String>,
    pub prev_password: Option<String>,
    pub prev_remember_me: Option<String>,
    pub error: Option<String>,
}

impl LoginRequest {
    /// Form state the page was rendered with, empty when the post carries none
    pub fn previous_form(&self) -> FormState {
        FormState {
            username: self.prev_username.clone().unwrap_or_default(),
            password: self.prev_password.clone().unwrap_or_default(),
            remember_me: self.prev_remember_me.as_deref() == Some("true"),
        }
    }

    pub fn previous_error(&self) -> Option<LoginError> {
        self.error.as_deref().and_then(LoginError::from_code)
    }

    /// Edits that turn `previous` into the posted values
    pub fn changed_fields(&self, previous: &FormState) -> Vec<FormField> {
        let mut fields = Vec::new();
        if self.prev_username.is_none() || self.username != previous.username {
            fields.push(FormField::Username(self.username.clone()));
        }
        if self.prev_password.is_none() || self.password != previous.password {
            fields.push(FormField::Password(self.password.clone()));
        }
        if self.prev_remember_me.is_none() || self.remember_me() != previous.remember_me {
            fields.push(FormField::RememberMe(self.remember_me()));
        }
        fields
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me.is_some()
    }

    pub fn show_password(&self) -> bool {
        self.show_password.as_deref() == Some("true")
    }

    pub fn is_toggle(&self) -> bool {
        self.action.as_deref() == Some("toggle")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiLoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}
