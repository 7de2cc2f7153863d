// src/infrastructure/security/session_gateway.rs
use crate::application::{
    ApplicationResult,
    dto::{PendingLogin, SessionClaims},
    error::ApplicationError,
    ports::session::SessionGateway,
};
use cookie::{Cookie, CookieJar, Key};
use serde::{Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha512};

// Bound into the ciphertext as associated data, so a value sealed for one
// purpose never opens as the other.
const SESSION_PURPOSE: &str = "session";
const PENDING_LOGIN_PURPOSE: &str = "pending_login";

/// `SessionGateway` backed by the `cookie` crate's private (AEAD) jar.
///
/// Values are encrypted and authenticated with a key derived from the
/// configured session secret; nothing is kept server-side.
#[derive(Clone)]
pub struct CookieSessionGateway {
    key: Key,
}

impl CookieSessionGateway {
    pub fn new(secret: &str) -> Self {
        let digest = Sha512::digest(secret.as_bytes());
        Self {
            key: Key::from(digest.as_slice()),
        }
    }

    fn seal<T: Serialize>(&self, purpose: &'static str, value: &T) -> ApplicationResult<String> {
        let json = serde_json::to_string(value)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut jar = CookieJar::new();
        jar.private_mut(&self.key).add(Cookie::new(purpose, json));

        jar.get(purpose)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| ApplicationError::infrastructure("sealed value missing from jar"))
    }

    fn open<T: DeserializeOwned>(&self, purpose: &'static str, sealed: &str) -> Option<T> {
        let mut jar = CookieJar::new();
        jar.add_original(Cookie::new(purpose, sealed.to_string()));

        let cookie = jar.private(&self.key).get(purpose)?;
        serde_json::from_str(cookie.value()).ok()
    }
}

impl SessionGateway for CookieSessionGateway {
    fn get_session(&self, sealed: &str) -> Option<SessionClaims> {
        self.open(SESSION_PURPOSE, sealed)
    }

    fn set_session(&self, claims: &SessionClaims) -> ApplicationResult<String> {
        self.seal(SESSION_PURPOSE, claims)
    }

    fn get_pending_login(&self, sealed: &str) -> Option<PendingLogin> {
        self.open(PENDING_LOGIN_PURPOSE, sealed)
    }

    fn set_pending_login(&self, pending: &PendingLogin) -> ApplicationResult<String> {
        self.seal(PENDING_LOGIN_PURPOSE, pending)
    }
}
