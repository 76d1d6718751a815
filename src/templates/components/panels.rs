use crate::models::{CredentialRecord, Feature, Stat};
use maud::{html, Markup};

pub fn feature_grid(features: &[Feature]) -> Markup {
    html! {
        div class="feature-grid" {
            @for feature in features {
                div class="feature-card" {
                    div class="feature-icon" aria-hidden="true" { (feature.icon) }
                    h3 { (feature.title) }
                    p { (feature.description) }
                }
            }
        }
    }
}

pub fn stat_counters(stats: &[Stat]) -> Markup {
    html! {
        div class="stats" {
            @for stat in stats {
                div class="stat" {
                    span class="stat-number" { (stat.value) }
                    span class="stat-label" { (stat.label) }
                }
            }
        }
    }
}

/// Hint list so visitors can try the demo accounts
pub fn demo_accounts(records: &[CredentialRecord]) -> Markup {
    html! {
        div class="demo-credentials" {
            h4 { "Demo Accounts" }
            ul {
                @for record in records {
                    li {
                        strong { (record.role.as_str()) ": " }
                        code { (record.username) }
                        " / "
                        code { (record.password) }
                    }
                }
            }
        }
    }
}
