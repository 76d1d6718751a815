use crate::{
    auth::LoginRequest,
    handlers::api::AppState,
    templates,
    view::{Acknowledgment, LoginView},
};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

pub async fn home_page() -> Redirect {
    Redirect::to("/login")
}

pub async fn login_page(State(state): State<Arc<AppState>>) -> Html<String> {
    render(&state, &LoginView::new(), None)
}

/// Rebuild the view the page was rendered from, apply the fields the user
/// changed since, then either toggle password visibility or submit.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(login_req): Form<LoginRequest>,
) -> Html<String> {
    let mut view = LoginView::restore(
        login_req.previous_form(),
        login_req.show_password(),
        login_req.previous_error(),
    );
    for field in login_req.changed_fields(view.form()) {
        view.edit(field);
    }

    if login_req.is_toggle() {
        view.toggle_password_visibility();
        return render(&state, &view, None);
    }

    let ack = view.submit(&state.portal);
    if let Some(ack) = &ack {
        ack.log();
    }

    render(&state, &view, ack.as_ref())
}

fn render(state: &AppState, view: &LoginView, ack: Option<&Acknowledgment>) -> Html<String> {
    let content = templates::login(&state.portal, view, ack);
    let page = templates::base(
        "Sign In",
        state.portal.content.app_name,
        &state.base_url,
        content,
    );
    Html(page.into_string())
}
