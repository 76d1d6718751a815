use crate::portal::Portal;
use crate::templates::components::{demo_accounts, feature_grid, stat_counters};
use crate::view::{Acknowledgment, LoginView};
use maud::{html, Markup, PreEscaped};

pub fn login(portal: &Portal, view: &LoginView, ack: Option<&Acknowledgment>) -> Markup {
    let content = &portal.content;
    let form = view.form();
    let visible = view.password_visible();

    html! {
        div class="app" {
            // Left side: branding
            div class="left-panel" {
                div class="collage-container" {
                    img src="/static/images/collage-1.svg" alt="Classroom setting" class="collage-img img-1";
                    img src="/static/images/collage-2.svg" alt="Happy students" class="collage-img img-2";
                    img src="/static/images/collage-3.svg" alt="Teacher signing" class="collage-img img-3";
                    img src="/static/images/collage-4.svg" alt="Student learning" class="collage-img img-4";
                }

                div class="branding" {
                    div class="logo" { (logo()) }
                    h1 { (content.app_name) }
                    p class="description" { (content.description) }

                    @if !content.features.is_empty() {
                        (feature_grid(&content.features))
                    }
                    @if !content.stats.is_empty() {
                        (stat_counters(&content.stats))
                    }
                }
            }

            // Right side: sign-in form
            div class="right-panel" {
                div class="login-container" {
                    div class="login-header" {
                        h2 { "Welcome Back" }
                        p { "Sign in to access your dashboard" }
                    }

                    form action="/login" method="post" class="login-form" {
                        // Enter submits through the first submit button, so it must not be the toggle
                        button type="submit" name="action" value="submit" class="visually-hidden"
                            tabindex="-1" aria-hidden="true" {}

                        // State this page was rendered from
                        input type="hidden" name="prev_username" value=(form.username);
                        input type="hidden" name="prev_password" value=(form.password);
                        input type="hidden" name="prev_remember_me"
                            value=(if form.remember_me { "true" } else { "false" });
                        @if let Some(failure) = view.failure() {
                            input type="hidden" name="error" value=(failure.code());
                        }

                        @if !view.error().is_empty() {
                            div class="error-message" role="alert" {
                                (view.error())
                            }
                        }

                        div class="form-group" {
                            label for="username" { "Username or Email" }
                            input type="text" id="username" name="username"
                                placeholder="Enter your username or email"
                                value=(form.username)
                                autocomplete="username";
                        }

                        div class="form-group" {
                            label for="password" { "Password" }
                            div class="password-input-wrapper" {
                                input type=(if visible { "text" } else { "password" })
                                    id="password" name="password"
                                    placeholder="Enter your password"
                                    value=(form.password)
                                    autocomplete="current-password";
                                input type="hidden" name="show_password"
                                    value=(if visible { "true" } else { "false" });
                                button type="submit" name="action" value="toggle"
                                    class="toggle-password"
                                    aria-label=(if visible { "Hide password" } else { "Show password" }) {
                                    (if visible { "👁️" } else { "👁️‍🗨️" })
                                }
                            }
                        }

                        div class="form-options" {
                            label class="checkbox-label" {
                                input type="checkbox" name="remember_me" checked[form.remember_me];
                                span { "Remember me" }
                            }
                            a href="#forgot" class="forgot-password" { "Forgot Password?" }
                        }

                        button type="submit" name="action" value="submit" class="login-button" {
                            "Sign In"
                        }

                        p class="register-link" {
                            "Don't have an account? "
                            a href="#register" { "Sign Up" }
                        }
                    }

                    @if content.show_demo_accounts {
                        @if let Some(store) = portal.credentials() {
                            (demo_accounts(store.records()))
                        }
                    }

                    div class="login-footer" {
                        p {
                            "© " (content.copyright_year) " " (content.app_name) " v" (content.version)
                        }
                        p { (content.tagline) }
                    }
                }
            }
        }

        @if let Some(ack) = ack {
            noscript {
                div class="success-message" { (ack.message) }
            }
            script {
                (PreEscaped(format!("window.alert({});", js_string(&ack.message))))
            }
        }
    }
}

/// Encode `text` as a JavaScript string literal safe to place inside a script tag
fn js_string(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

fn logo() -> Markup {
    html! {
        svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" aria-hidden="true" {
            circle cx="12" cy="12" r="3" fill="white" {}
            circle cx="12" cy="12" r="7" fill="none" stroke="white" stroke-width="2" {}
            circle cx="12" cy="12" r="10" fill="none" stroke="white" stroke-width="1.5" opacity="0.5" {}
        }
    }
}
