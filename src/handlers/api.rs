use crate::{
    auth::ApiLoginRequest,
    models::FormField,
    portal::{DisplayContent, Portal},
    view::LoginView,
};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;

pub struct AppState {
    pub portal: Portal,
    pub base_url: String,
}

pub async fn login_api(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ApiLoginRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut view = LoginView::new();
    view.edit(FormField::Username(req.username));
    view.edit(FormField::Password(req.password));
    view.edit(FormField::RememberMe(req.remember_me));

    match view.submit(&state.portal) {
        Some(ack) => {
            ack.log();
            let mut body = json!({
                "message": ack.message,
                "username": ack.username,
                "remember_me": ack.remember_me,
            });
            if let Some(account) = &ack.account {
                body["name"] = json!(account.name);
                body["role"] = json!(account.role.as_str());
                body["destination"] = json!(account.role.destination());
            }
            (StatusCode::OK, Json(body))
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": view.error() })),
        ),
    }
}

pub async fn portal_content(State(state): State<Arc<AppState>>) -> Json<DisplayContent> {
    Json(state.portal.content.clone())
}

pub async fn health() -> &'static str {
    "ok"
}
