// src/infrastructure/avatar.rs
use crate::application::{
    ApplicationResult, dto::AvatarImage, error::ApplicationError, ports::avatar::AvatarFetcher,
};
use crate::domain::avatar::AvatarUrl;
use async_trait::async_trait;
use bytes::BytesMut;
use reqwest::{StatusCode, header::CONTENT_TYPE};
use std::time::Duration;

pub const AVATAR_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "-avatar-proxy/", env!("CARGO_PKG_VERSION"));

/// Fetches avatars over HTTP with a hard timeout. Redirects are not
/// followed, since the target of a redirect has not been through the
/// allowlist.
#[derive(Clone)]
pub struct HttpAvatarFetcher {
    client: reqwest::Client,
}

impl HttpAvatarFetcher {
    pub fn new() -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(AVATAR_FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AvatarFetcher for HttpAvatarFetcher {
    async fn fetch(&self, url: &AvatarUrl) -> ApplicationResult<AvatarImage> {
        let mut response = self
            .client
            .get(url.as_url().clone())
            .send()
            .await
            .map_err(|err| ApplicationError::upstream(format!("avatar request failed: {err}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApplicationError::upstream(format!(
                "avatar upstream responded with {status}"
            )));
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_AVATAR_BYTES as u64)
        {
            return Err(ApplicationError::upstream("avatar exceeds size limit"));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        // chunked bodies carry no length, so the cap is enforced while reading
        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|err| ApplicationError::upstream(format!("avatar body read failed: {err}")))?
        {
            if body.len() + chunk.len() > MAX_AVATAR_BYTES {
                return Err(ApplicationError::upstream("avatar exceeds size limit"));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(AvatarImage {
            content_type,
            body: body.freeze(),
        })
    }
}
