use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use login_theme::context::KcContext;
use login_theme::i18n::Locale;
use login_theme::state::AppState;
use serde_json::json;
use tower::ServiceExt;

fn app(context: KcContext) -> axum::Router {
    login_theme::app(AppState::new(context, Locale::Tr), "static")
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[tokio::test]
async fn should_render_configured_login_page() {
    let resp = app(KcContext::mock())
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>Yıldız Skylab</title>"));
    assert!(body.contains(
        r#"<form id="kc-form-login" class="auth-form" action="/realms/skylab/login-actions/authenticate" method="post" novalidate>"#
    ));
    assert!(body.contains(r#"href="/realms/skylab/login-actions/reset-credentials""#));
}

#[tokio::test]
async fn should_render_requested_locale() {
    let resp = app(KcContext::mock())
        .oneshot(
            Request::get("/login?locale=en")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains(">Sign in</button>"));
}

#[tokio::test]
async fn should_reject_unknown_locale() {
    let resp = app(KcContext::mock())
        .oneshot(
            Request::get("/login?locale=xx")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_not_render_unsupported_page() {
    let resp = app(KcContext::Unsupported)
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_string(resp).await;
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn should_preview_posted_context() {
    let ctx = json!({
        "pageId": "login.ftl",
        "realm": { "password": true, "rememberMe": true },
        "url": { "loginAction": "https://idp/authenticate" },
        "login": { "username": "jora" },
        "message": { "type": "error", "summary": "Invalid credentials" },
        "auth": { "selectedCredential": "cred-123" },
        "usernameHidden": true
    });

    let resp = app(KcContext::mock())
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(ctx.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(
        r#"<div class="auth-alert auth-alert-error" role="alert"><strong>Hata</strong><span>Invalid credentials</span></div>"#
    ));
    assert_eq!(
        body.matches(r#"<input type="hidden" name="credentialId" value="cred-123">"#)
            .count(),
        1
    );
    assert!(!body.contains(r#"name="username""#));
    assert!(!body.contains(r#"name="rememberMe""#));
    assert!(body.contains(r#"name="password""#));
    assert!(!body.contains("auth-forgot-link"));
}

#[tokio::test]
async fn should_preview_context_without_realm() {
    let ctx = json!({
        "pageId": "login.ftl",
        "url": { "loginAction": "https://idp/authenticate" }
    });

    let resp = app(KcContext::mock())
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(ctx.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"action="https://idp/authenticate""#));
    assert!(!body.contains(r#"name="username""#));
    assert!(!body.contains(r#"name="password""#));
    assert!(!body.contains(r#"name="rememberMe""#));
    assert!(body.contains(r#"name="login""#));
}

#[tokio::test]
async fn should_accept_regional_locale_query() {
    let resp = app(KcContext::mock())
        .oneshot(
            Request::get("/login?locale=en-US")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn should_reject_malformed_preview() {
    let resp = app(KcContext::mock())
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn should_render_identical_pages_for_identical_context() {
    let first = app(KcContext::mock())
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let second = app(KcContext::mock())
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_string(first).await, body_string(second).await);
}

#[tokio::test]
async fn should_report_health() {
    let resp = app(KcContext::mock())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
