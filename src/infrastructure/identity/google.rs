//! Google sign-in via the OAuth2 authorization-code flow with PKCE.
//!
//! The consent URL requests the configured scopes (`email`, `profile` by
//! default); the callback code is exchanged at Google's token endpoint and
//! the access token is used once against the userinfo endpoint to read the
//! profile. Tokens are discarded afterwards.

use crate::application::{
    ApplicationResult,
    dto::{AuthorizationRequest, ProviderProfile},
    error::ApplicationError,
    ports::identity::IdentityProvider,
};
use crate::config::GoogleConfig;
use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;
use std::time::Duration;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Google userinfo (v2) response.
#[derive(Debug, Deserialize)]
struct GoogleUser {
    id: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

pub struct GoogleIdentityProvider {
    client: ConfiguredClient,
    scopes: Vec<String>,
    http: reqwest::Client,
}

impl GoogleIdentityProvider {
    pub fn new(config: &GoogleConfig) -> ApplicationResult<Self> {
        let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let redirect_url = RedirectUrl::new(config.callback_url.clone())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url);

        // the token endpoint must not be allowed to bounce us elsewhere
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(PROVIDER_TIMEOUT)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            client,
            scopes: config.scopes.clone(),
            http,
        })
    }

    async fn fetch_profile(&self, access_token: &str) -> ApplicationResult<GoogleUser> {
        self.http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| ApplicationError::upstream(format!("userinfo request failed: {err}")))?
            .json::<GoogleUser>()
            .await
            .map_err(|err| ApplicationError::upstream(format!("userinfo response invalid: {err}")))
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn authorization_request(&self, state: &str) -> ApplicationResult<AuthorizationRequest> {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, _state) = self
            .client
            .authorize_url(|| CsrfToken::new(state.to_string()))
            .add_scopes(self.scopes.iter().cloned().map(Scope::new))
            .set_pkce_challenge(pkce_challenge)
            .url();

        Ok(AuthorizationRequest {
            url: auth_url.to_string(),
            pkce_verifier: pkce_verifier.secret().clone(),
        })
    }

    async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> ApplicationResult<ProviderProfile> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|err| ApplicationError::upstream(format!("token exchange failed: {err}")))?;

        let user = self.fetch_profile(token.access_token().secret()).await?;

        Ok(ProviderProfile {
            id: user.id,
            name: user.name.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            avatar_url: user.picture.unwrap_or_default(),
        })
    }
}
