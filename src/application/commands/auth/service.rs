use std::sync::Arc;

use super::RedirectPolicy;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        identity::{IdentityProvider, IdentityProviders},
        session::SessionGateway,
    },
};

pub struct AuthCommandService {
    pub(super) providers: IdentityProviders,
    pub(super) session_gateway: Arc<dyn SessionGateway>,
    pub(super) redirects: RedirectPolicy,
}

impl AuthCommandService {
    pub fn new(
        providers: IdentityProviders,
        session_gateway: Arc<dyn SessionGateway>,
        redirects: RedirectPolicy,
    ) -> Self {
        Self {
            providers,
            session_gateway,
            redirects,
        }
    }

    pub(super) fn resolve_provider(
        &self,
        name: &str,
    ) -> ApplicationResult<Arc<dyn IdentityProvider>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("missing provider"));
        }
        self.providers
            .get(name)
            .ok_or_else(|| ApplicationError::validation(format!("unknown provider '{name}'")))
    }
}
