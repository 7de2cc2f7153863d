// tests/support/mocks.rs
use async_trait::async_trait;
use bytes::Bytes;
use signon_api::application::{
    ApplicationResult,
    dto::{AuthorizationRequest, AvatarImage, ProviderProfile},
    error::ApplicationError,
    ports::{avatar::AvatarFetcher, identity::IdentityProvider},
};
use signon_api::domain::avatar::AvatarUrl;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use url::Url;

pub const GOOD_CODE: &str = "good-code";
pub const MOCK_AUTHORIZE_URL: &str = "https://idp.test/authorize";
pub const MOCK_PKCE_VERIFIER: &str = "test-pkce-verifier";

pub const USER_ID: &str = "10769150350006150715113082367";
pub const USER_NAME: &str = "Ada Lovelace";
pub const USER_EMAIL: &str = "ada@example.com";
pub const USER_PICTURE: &str = "https://lh3.googleusercontent.com/a/ada";

/* -------------------------------- IdentityProvider -------------------------------- */

/// Stands in for Google: the consent URL points at `idp.test` and only
/// `GOOD_CODE` with the matching PKCE verifier yields a profile.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    exchanges: AtomicUsize,
}

impl MockIdentityProvider {
    pub fn exchanges(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn authorization_request(&self, state: &str) -> ApplicationResult<AuthorizationRequest> {
        let mut url = Url::parse(MOCK_AUTHORIZE_URL).expect("static url");
        url.query_pairs_mut()
            .append_pair("client_id", "test-client")
            .append_pair("state", state);
        Ok(AuthorizationRequest {
            url: url.into(),
            pkce_verifier: MOCK_PKCE_VERIFIER.into(),
        })
    }

    async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> ApplicationResult<ProviderProfile> {
        self.exchanges.fetch_add(1, Ordering::SeqCst);
        if code != GOOD_CODE || pkce_verifier != MOCK_PKCE_VERIFIER {
            return Err(ApplicationError::upstream("invalid_grant"));
        }
        Ok(ProviderProfile {
            id: USER_ID.into(),
            name: USER_NAME.into(),
            email: USER_EMAIL.into(),
            avatar_url: USER_PICTURE.into(),
        })
    }
}

/* -------------------------------- AvatarFetcher -------------------------------- */

#[derive(Debug, Clone)]
pub enum AvatarReply {
    Image {
        content_type: Option<&'static str>,
        body: &'static [u8],
    },
    UpstreamError,
}

/// Returns a canned reply and records every URL it was asked for.
#[derive(Debug)]
pub struct RecordingAvatarFetcher {
    reply: AvatarReply,
    requested: Mutex<Vec<String>>,
}

impl RecordingAvatarFetcher {
    pub fn new(reply: AvatarReply) -> Self {
        Self {
            reply,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn png() -> Self {
        Self::new(AvatarReply::Image {
            content_type: Some("image/png"),
            body: PNG_BYTES,
        })
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().expect("lock").len()
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("lock").clone()
    }
}

impl Default for RecordingAvatarFetcher {
    fn default() -> Self {
        Self::png()
    }
}

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

#[async_trait]
impl AvatarFetcher for RecordingAvatarFetcher {
    async fn fetch(&self, url: &AvatarUrl) -> ApplicationResult<AvatarImage> {
        self.requested
            .lock()
            .expect("lock")
            .push(url.as_str().to_string());

        match &self.reply {
            AvatarReply::Image { content_type, body } => Ok(AvatarImage {
                content_type: content_type.map(str::to_string),
                body: Bytes::from_static(body),
            }),
            AvatarReply::UpstreamError => Err(ApplicationError::upstream(
                "avatar upstream responded with 404 Not Found",
            )),
        }
    }
}
