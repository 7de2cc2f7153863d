use super::{AuthCommandService, LoginState};
use crate::application::{dto::PendingLogin, error::ApplicationResult};
use uuid::Uuid;

pub struct BeginLoginCommand {
    pub provider: String,
    /// Frontend URL to come back to once the login completes.
    pub return_to: Option<String>,
}

pub struct BeginLoginResult {
    /// Provider consent-screen URL.
    pub redirect_url: String,
    /// Sealed `PendingLogin`, destined for the flow cookie.
    pub pending_login: String,
}

impl AuthCommandService {
    pub fn begin_login(&self, command: BeginLoginCommand) -> ApplicationResult<BeginLoginResult> {
        let provider = self.resolve_provider(&command.provider)?;

        let return_to = command
            .return_to
            .as_deref()
            .and_then(|candidate| self.redirects.sanitize(candidate));
        if command.return_to.is_some() && return_to.is_none() {
            tracing::warn!(provider = provider.name(), "ignoring return url outside the frontend origin");
        }

        let nonce = Uuid::new_v4().simple().to_string();
        let state = LoginState {
            nonce: nonce.clone(),
            return_to,
        }
        .encode()?;

        let request = provider.authorization_request(&state)?;

        let pending_login = self.session_gateway.set_pending_login(&PendingLogin {
            provider: provider.name().to_string(),
            nonce,
            pkce_verifier: request.pkce_verifier,
        })?;

        tracing::debug!(provider = provider.name(), "login started");

        Ok(BeginLoginResult {
            redirect_url: request.url,
            pending_login,
        })
    }
}
