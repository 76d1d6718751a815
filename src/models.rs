use serde::{Deserialize, Serialize};
use std::fmt;

/// Values currently entered in the sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

/// A single edit to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Username(String),
    Password(String),
    RememberMe(bool),
}

impl FormState {
    /// Return a copy with exactly one field replaced
    pub fn with(&self, field: FormField) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Username(value) => next.username = value,
            FormField::Password(value) => next.password = value,
            FormField::RememberMe(checked) => next.remember_me = checked,
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }

    /// Where a signed-in account of this role would land
    pub fn destination(&self) -> &'static str {
        match self {
            Role::Teacher => "Academic Dashboard",
            _ => "Admin Panel",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One demo account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRecord {
    pub id: u32,
    pub username: &'static str,
    #[serde(skip_serializing)]
    pub password: &'static str,
    pub role: Role,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}
