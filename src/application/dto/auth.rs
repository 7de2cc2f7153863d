/// Profile claims returned by an identity provider after a successful code
/// exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Where to send the browser to start a provider login, plus the PKCE
/// verifier that must be presented when the code comes back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub pkce_verifier: String,
}
