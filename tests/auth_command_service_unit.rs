use signon_api::application::{
    commands::auth::{
        AuthCommandService, BeginLoginCommand, CompleteLoginCommand, LoginState, RedirectPolicy,
    },
    dto::PendingLogin,
    error::ApplicationError,
    ports::{identity::IdentityProviders, session::SessionGateway},
};
use std::sync::Arc;
use url::Url;

mod support;

use support::{FRONTEND_ORIGIN, GOOD_CODE, MOCK_PKCE_VERIFIER, MockIdentityProvider, session_gateway};

fn service() -> AuthCommandService {
    AuthCommandService::new(
        IdentityProviders::new().with(Arc::new(MockIdentityProvider::default())),
        Arc::new(session_gateway()),
        RedirectPolicy::new(Url::parse(FRONTEND_ORIGIN).unwrap(), "/welcome"),
    )
}

fn state_of(redirect_url: &str) -> LoginState {
    let url = Url::parse(redirect_url).unwrap();
    let raw = url
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    LoginState::decode(&raw).unwrap()
}

#[test]
fn begin_login_binds_state_nonce_to_pending_login() {
    let result = service()
        .begin_login(BeginLoginCommand {
            provider: "google".into(),
            return_to: Some("/settings".into()),
        })
        .unwrap();

    let state = state_of(&result.redirect_url);
    assert_eq!(state.return_to.as_deref(), Some("http://localhost:5173/settings"));

    let pending = session_gateway()
        .get_pending_login(&result.pending_login)
        .expect("pending login opens");
    assert_eq!(pending.provider, "google");
    assert_eq!(pending.nonce, state.nonce);
    assert_eq!(pending.pkce_verifier, MOCK_PKCE_VERIFIER);
}

#[test]
fn begin_login_drops_foreign_return_url() {
    let result = service()
        .begin_login(BeginLoginCommand {
            provider: "google".into(),
            return_to: Some("https://evil.example/".into()),
        })
        .unwrap();

    assert_eq!(state_of(&result.redirect_url).return_to, None);
}

#[test]
fn begin_login_rejects_blank_provider() {
    let err = service()
        .begin_login(BeginLoginCommand {
            provider: "  ".into(),
            return_to: None,
        })
        .err()
        .unwrap();

    assert!(matches!(err, ApplicationError::Validation(msg) if msg == "missing provider"));
}

#[tokio::test]
async fn complete_login_redirects_to_configured_default() {
    let svc = service();
    let begun = svc
        .begin_login(BeginLoginCommand {
            provider: "google".into(),
            return_to: None,
        })
        .unwrap();
    let raw_state = Url::parse(&begun.redirect_url)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned());

    let done = svc
        .complete_login(CompleteLoginCommand {
            provider: "google".into(),
            code: Some(GOOD_CODE.into()),
            state: raw_state,
            error: None,
            error_description: None,
            pending_login: Some(begun.pending_login),
        })
        .await
        .unwrap();

    assert_eq!(done.redirect_to, "http://localhost:5173/welcome");
    assert_eq!(done.user_id, support::USER_ID);
    let claims = session_gateway().get_session(&done.session).unwrap();
    assert_eq!(claims.user_email, support::USER_EMAIL);
}

#[tokio::test]
async fn pending_login_for_another_provider_is_a_mismatch() {
    let gateway = session_gateway();
    let state = LoginState {
        nonce: "n-1".into(),
        return_to: None,
    };
    let pending = gateway
        .set_pending_login(&PendingLogin {
            provider: "other".into(),
            nonce: "n-1".into(),
            pkce_verifier: MOCK_PKCE_VERIFIER.into(),
        })
        .unwrap();

    let err = service()
        .complete_login(CompleteLoginCommand {
            provider: "google".into(),
            code: Some(GOOD_CODE.into()),
            state: Some(state.encode().unwrap()),
            error: None,
            error_description: None,
            pending_login: Some(pending),
        })
        .await
        .err()
        .unwrap();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[test]
fn logout_validates_provider() {
    let svc = service();
    assert!(svc.logout("google", None).is_ok());
    assert!(matches!(
        svc.logout("github", Some("whatever")),
        Err(ApplicationError::Validation(_))
    ));
}
