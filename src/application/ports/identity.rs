use crate::application::{
    ApplicationResult,
    dto::{AuthorizationRequest, ProviderProfile},
};
use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Arc};

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name as it appears in route paths, e.g. `google`.
    fn name(&self) -> &str;

    /// Build the consent-screen URL carrying `state` and a fresh PKCE challenge.
    fn authorization_request(&self, state: &str) -> ApplicationResult<AuthorizationRequest>;

    /// Exchange an authorization code for the user's basic profile.
    async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> ApplicationResult<ProviderProfile>;
}

/// The identity providers wired into this process, keyed by name.
#[derive(Clone, Default)]
pub struct IdentityProviders {
    providers: BTreeMap<String, Arc<dyn IdentityProvider>>,
}

impl IdentityProviders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.providers.insert(provider.name().to_string(), provider);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn IdentityProvider>> {
        self.providers.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}
