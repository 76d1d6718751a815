use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use std::{path::Path, sync::Arc};
use tower::ServiceExt;
use vocalink::{handlers::AppState, portal::Portal, startup};

fn app(portal: Portal) -> Router {
    let state = Arc::new(AppState {
        portal,
        base_url: "http://localhost:3000".to_string(),
    });
    startup::router(state, &Path::new(env!("CARGO_MANIFEST_DIR")).join("static"))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn post_form(app: Router, body: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_string(response).await)
}

async fn post_json(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::post("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = body_string(response).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_root_redirects_to_login() {
    let response = app(Portal::basic())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_login_page_renders_form() {
    let response = app(Portal::basic())
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Sign In - VocaLink"));
    assert!(html.contains(r#"name="username""#));
    assert!(html.contains(r#"type="password""#));
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_empty_username_shows_error() {
    let (status, html) = post_form(app(Portal::basic()), "username=&password=anything").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please enter both username and password"));
    assert!(!html.contains("window.alert"));
    // The typed password is kept for the retry
    assert!(html.contains(r#"value="anything""#));
}

#[tokio::test]
async fn test_missing_password_field_shows_error() {
    let (_, html) = post_form(app(Portal::demo()), "username=anything").await;
    assert!(html.contains("Please enter both username and password"));
}

#[tokio::test]
async fn test_basic_accepts_any_pair() {
    let (status, html) = post_form(
        app(Portal::basic()),
        "username=alice&password=pw1&remember_me=on&action=submit",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("window.alert"));
    assert!(html.contains("Welcome, alice."));
    assert!(!html.contains("error-message"));
    assert!(html.contains(r#"name="remember_me" checked"#));
}

#[tokio::test]
async fn test_demo_teacher_signs_in() {
    let (_, html) = post_form(
        app(Portal::demo()),
        "username=teacher%40vocalink.com&password=teacher123",
    )
    .await;

    assert!(html.contains("Ms. Johnson"));
    assert!(html.contains("Academic Dashboard"));
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_demo_wrong_password() {
    let (_, html) = post_form(
        app(Portal::demo()),
        "username=teacher%40vocalink.com&password=wrong",
    )
    .await;

    assert!(html.contains("Invalid username or password"));
    assert!(!html.contains("window.alert"));
}

#[tokio::test]
async fn test_demo_username_is_case_sensitive() {
    let (_, html) = post_form(
        app(Portal::demo()),
        "username=Teacher%40vocalink.com&password=teacher123",
    )
    .await;

    assert!(html.contains("Invalid username or password"));
}

#[tokio::test]
async fn test_toggle_shows_password_and_keeps_fields() {
    let (_, html) = post_form(
        app(Portal::demo()),
        "username=bob&password=secret&show_password=false&action=toggle",
    )
    .await;

    assert!(html.contains(r#"type="text" id="password""#));
    assert!(html.contains(r#"value="secret""#));
    assert!(html.contains(r#"value="bob""#));
    assert!(html.contains(r#"name="show_password" value="true""#));
    // Toggling never validates
    assert!(!html.contains("error-message"));
    assert!(!html.contains("window.alert"));
}

#[tokio::test]
async fn test_toggle_twice_hides_password() {
    let (_, html) = post_form(
        app(Portal::basic()),
        "username=&password=secret&show_password=true&action=toggle",
    )
    .await;

    assert!(html.contains(r#"type="password""#));
    assert!(html.contains(r#"name="show_password" value="false""#));
}

#[tokio::test]
async fn test_toggle_after_failed_submit_keeps_banner() {
    let (_, html) = post_form(
        app(Portal::basic()),
        "username=&password=&show_password=false&action=submit",
    )
    .await;
    assert!(html.contains("error-message"));
    assert!(html.contains(r#"name="error" value="missing_field""#));

    // What the rendered page posts back when the eye button is clicked
    let (_, html) = post_form(
        app(Portal::basic()),
        "prev_username=&prev_password=&prev_remember_me=false&error=missing_field\
         &username=&password=&show_password=false&action=toggle",
    )
    .await;
    assert!(html.contains(r#"type="text" id="password""#));
    assert!(html.contains("Please enter both username and password"));
    assert!(html.contains(r#"name="error" value="missing_field""#));
}

#[tokio::test]
async fn test_toggle_after_invalid_credentials_keeps_banner() {
    let (_, html) = post_form(
        app(Portal::demo()),
        "prev_username=teacher%40vocalink.com&prev_password=wrong&prev_remember_me=false\
         &error=invalid_credentials\
         &username=teacher%40vocalink.com&password=wrong&show_password=false&action=toggle",
    )
    .await;
    assert!(html.contains("Invalid username or password"));
}

#[tokio::test]
async fn test_toggle_after_edit_clears_banner() {
    let (_, html) = post_form(
        app(Portal::basic()),
        "prev_username=&prev_password=&prev_remember_me=false&error=missing_field\
         &username=alice&password=&show_password=false&action=toggle",
    )
    .await;
    assert!(html.contains(r#"type="text" id="password""#));
    assert!(!html.contains("error-message"));
    assert!(!html.contains(r#"name="error""#));
    assert!(html.contains(r#"value="alice""#));
}

#[tokio::test]
async fn test_checkbox_change_clears_banner() {
    let (_, html) = post_form(
        app(Portal::basic()),
        "prev_username=&prev_password=&prev_remember_me=false&error=missing_field\
         &username=&password=&remember_me=on&show_password=false&action=toggle",
    )
    .await;
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_unknown_error_code_is_ignored() {
    let (_, html) = post_form(
        app(Portal::basic()),
        "prev_username=&prev_password=&prev_remember_me=false&error=%3Cscript%3E\
         &username=&password=&show_password=false&action=toggle",
    )
    .await;
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_collage_images_are_served() {
    let response = app(Portal::demo())
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = body_string(response).await;

    let images: Vec<&str> = html
        .split(r#"src=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|src| src.starts_with("/static/"))
        .collect();
    assert_eq!(images.len(), 4);

    for src in images {
        let response = app(Portal::demo())
            .oneshot(Request::get(src).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{src} should be served");
    }
}

#[tokio::test]
async fn test_submit_keeps_visibility() {
    let (_, html) = post_form(
        app(Portal::basic()),
        "username=&password=secret&show_password=true&action=submit",
    )
    .await;

    assert!(html.contains(r#"type="text" id="password""#));
    assert!(html.contains("Please enter both username and password"));
}

#[tokio::test]
async fn test_api_login_success() {
    let (status, body) = post_json(
        app(Portal::demo()),
        serde_json::json!({
            "username": "teacher@vocalink.com",
            "password": "teacher123",
            "remember_me": true,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ms. Johnson");
    assert_eq!(body["role"], "Teacher");
    assert_eq!(body["destination"], "Academic Dashboard");
    assert_eq!(body["remember_me"], true);
}

#[tokio::test]
async fn test_api_login_basic_success() {
    let (status, body) = post_json(
        app(Portal::basic()),
        serde_json::json!({ "username": "alice", "password": "pw1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert!(body.get("name").is_none());
    assert!(body.get("role").is_none());
}

#[tokio::test]
async fn test_api_login_failures() {
    let (status, body) = post_json(
        app(Portal::demo()),
        serde_json::json!({ "username": "teacher@vocalink.com", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");

    let (status, body) = post_json(app(Portal::demo()), serde_json::json!({})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Please enter both username and password");
}

#[tokio::test]
async fn test_portal_content_api() {
    let response = app(Portal::demo())
        .oneshot(Request::get("/api/portal").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["app_name"], "VocaLink");
    assert_eq!(body["stats"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_health() {
    let response = app(Portal::basic())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}
