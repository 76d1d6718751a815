//! Configuration instances of the sign-in portal.
//!
//! Both variants share one page and one submit routine. A [`Portal`] carries
//! what differs between them: the text and panels to display, the optional
//! credential store, and how a successful outcome is worded.

use crate::auth::{CredentialStore, Outcome};
use crate::models::{Feature, Stat};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Accept any non-empty username and password
    Basic,
    /// Match against the built-in demo accounts
    Demo,
}

/// Immutable text and panels shown on the page
#[derive(Debug, Clone, Serialize)]
pub struct DisplayContent {
    pub app_name: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
    pub copyright_year: u16,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub show_demo_accounts: bool,
}

pub type SuccessMessage = fn(&Outcome<'_>) -> String;

pub struct Portal {
    pub variant: Variant,
    pub content: DisplayContent,
    pub credentials: Option<CredentialStore>,
    pub success_message: SuccessMessage,
}

impl Portal {
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Basic => Self::basic(),
            Variant::Demo => Self::demo(),
        }
    }

    pub fn basic() -> Self {
        Self {
            variant: Variant::Basic,
            content: DisplayContent {
                app_name: "VocaLink",
                description: "Empowering people to connect with deaf and mute individuals through seamless communication.",
                tagline: "Designed for Deaf & Mute Individuals",
                version: "1.0.0",
                copyright_year: 2026,
                features: Vec::new(),
                stats: Vec::new(),
                show_demo_accounts: false,
            },
            credentials: None,
            success_message: welcome_username,
        }
    }

    pub fn demo() -> Self {
        Self {
            variant: Variant::Demo,
            content: DisplayContent {
                app_name: "VocaLink",
                description: "Bridging classrooms and communities through sign language, captions and accessible messaging.",
                tagline: "Designed for Deaf & Mute Individuals",
                version: "2.0.0",
                copyright_year: 2026,
                features: vec![
                    Feature {
                        icon: "🤟",
                        title: "Sign Language Support",
                        description: "Lessons and messages with sign language video alongside text.",
                    },
                    Feature {
                        icon: "💬",
                        title: "Real-time Captions",
                        description: "Live captions for every classroom session.",
                    },
                    Feature {
                        icon: "📚",
                        title: "Accessible Lessons",
                        description: "Course material built for visual learners.",
                    },
                    Feature {
                        icon: "👪",
                        title: "Family Connect",
                        description: "Keep parents and guardians in the conversation.",
                    },
                ],
                stats: vec![
                    Stat { value: "5,000+", label: "Students" },
                    Stat { value: "300+", label: "Teachers" },
                    Stat { value: "50+", label: "Schools" },
                ],
                show_demo_accounts: true,
            },
            credentials: Some(CredentialStore::demo()),
            success_message: welcome_account,
        }
    }

    pub fn credentials(&self) -> Option<&CredentialStore> {
        self.credentials.as_ref()
    }

    pub fn acknowledge(&self, outcome: &Outcome<'_>) -> String {
        (self.success_message)(outcome)
    }
}

fn welcome_username(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Accepted { username } => format!("Login Successful!\nWelcome, {}.", username),
        Outcome::Matched(record) => format!("Login Successful!\nWelcome, {}.", record.username),
    }
}

fn welcome_account(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Matched(record) => format!(
            "Login Successful!\nWelcome, {} ({}).\nRedirecting to {}...",
            record.name,
            record.role,
            record.role.destination()
        ),
        Outcome::Accepted { .. } => welcome_username(outcome),
    }
}
