use super::AuthCommandService;
use crate::application::{dto::SessionClaims, error::ApplicationResult};

impl AuthCommandService {
    /// Validate a logout request. The session itself lives in the browser, so
    /// clearing it is the HTTP layer's job; this only checks the provider and
    /// records who left.
    pub fn logout(&self, provider: &str, session: Option<&str>) -> ApplicationResult<()> {
        let provider = self.resolve_provider(provider)?;

        let user_id = session
            .and_then(|sealed| self.session_gateway.get_session(sealed))
            .and_then(|claims: SessionClaims| claims.user_id);

        match user_id {
            Some(user_id) => tracing::info!(provider = provider.name(), user_id = %user_id, "user signed out"),
            None => tracing::debug!(provider = provider.name(), "logout without an active session"),
        }

        Ok(())
    }
}
