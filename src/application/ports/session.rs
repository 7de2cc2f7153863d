use crate::application::{
    ApplicationResult,
    dto::{PendingLogin, SessionClaims},
};

/// Seals session state into opaque values the HTTP layer can hand to the
/// browser, and opens them again on the way back in.
///
/// `get_*` returns `None` for anything that fails authentication or does not
/// decode; callers treat that the same as an absent cookie.
pub trait SessionGateway: Send + Sync {
    fn get_session(&self, sealed: &str) -> Option<SessionClaims>;

    fn set_session(&self, claims: &SessionClaims) -> ApplicationResult<String>;

    fn get_pending_login(&self, sealed: &str) -> Option<PendingLogin>;

    fn set_pending_login(&self, pending: &PendingLogin) -> ApplicationResult<String>;
}
