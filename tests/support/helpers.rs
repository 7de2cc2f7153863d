// tests/support/helpers.rs
use super::mocks::{MockIdentityProvider, RecordingAvatarFetcher};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use signon_api::application::{
    commands::auth::RedirectPolicy,
    dto::SessionClaims,
    ports::{identity::IdentityProviders, session::SessionGateway},
    services::ApplicationServices,
};
use signon_api::domain::avatar::HostAllowlist;
use signon_api::infrastructure::security::session_gateway::CookieSessionGateway;
use signon_api::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{CookieSettings, HttpState},
};
use std::{sync::Arc, time::Duration};
use url::Url;

pub const TEST_SECRET: &str = "integration-test-session-secret-value";
pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";
pub const ALLOWED_AVATAR_HOSTS: [&str; 2] = ["googleusercontent.com", "gravatar.com"];

/// Knobs for the router under test. Everything else is fixed.
pub struct TestOptions {
    pub fetcher: Arc<RecordingAvatarFetcher>,
    pub identity: Arc<MockIdentityProvider>,
    pub secure_cookies: bool,
    pub rate_limit_avatar: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            fetcher: Arc::new(RecordingAvatarFetcher::default()),
            identity: Arc::new(MockIdentityProvider::default()),
            secure_cookies: false,
            rate_limit_avatar: false,
        }
    }
}

pub fn session_gateway() -> CookieSessionGateway {
    CookieSessionGateway::new(TEST_SECRET)
}

pub fn build_test_state(options: &TestOptions) -> HttpState {
    let frontend = Url::parse(FRONTEND_ORIGIN).expect("frontend origin");
    let providers = IdentityProviders::new().with(options.identity.clone());

    let services = Arc::new(ApplicationServices::new(
        providers,
        Arc::new(session_gateway()),
        options.fetcher.clone(),
        RedirectPolicy::new(frontend.clone(), "/"),
        HostAllowlist::new(ALLOWED_AVATAR_HOSTS),
    ));

    HttpState {
        services,
        cookies: CookieSettings {
            secure: options.secure_cookies,
            session_max_age: Duration::from_secs(60 * 60 * 24 * 30),
        },
        allowed_origin: frontend.origin().ascii_serialization(),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(TestOptions::default())
}

pub fn make_test_router_with(options: TestOptions) -> axum::Router {
    let state = build_test_state(&options);
    build_router_with_rate_limiter(state, options.rate_limit_avatar)
}

/// Seal `claims` the same way the server does, for requests that need an
/// existing session.
pub fn sealed_session(claims: &SessionClaims) -> String {
    session_gateway().set_session(claims).expect("seal session")
}

pub fn signed_in_claims() -> SessionClaims {
    SessionClaims {
        user_id: Some(super::mocks::USER_ID.into()),
        user_name: super::mocks::USER_NAME.into(),
        user_email: super::mocks::USER_EMAIL.into(),
        user_picture: super::mocks::USER_PICTURE.into(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// GET with a `Cookie` header built from `(name, value)` pairs.
pub fn get_with_cookies(uri: &str, cookies: &[(&str, &str)]) -> Request<Body> {
    let header_value = cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, header_value)
        .body(Body::empty())
        .unwrap()
}

pub fn set_cookie_headers(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// The full `Set-Cookie` line for `name`, if the response set one.
pub fn find_set_cookie(resp: &Response, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    set_cookie_headers(resp)
        .into_iter()
        .find(|line| line.starts_with(&prefix))
}

/// Value part of a `Set-Cookie` line.
pub fn cookie_value(set_cookie: &str) -> String {
    let pair = set_cookie.split(';').next().unwrap_or_default();
    pair.split_once('=')
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
