use super::{AuthCommandService, LoginState};
use crate::application::{
    dto::SessionClaims,
    error::{ApplicationError, ApplicationResult},
};

/// Parameters of a provider callback together with the flow cookie issued
/// when the login began.
pub struct CompleteLoginCommand {
    pub provider: String,
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub pending_login: Option<String>,
}

pub struct CompleteLoginResult {
    /// Sealed `SessionClaims`, destined for the session cookie.
    pub session: String,
    pub redirect_to: String,
    pub user_id: String,
}

impl AuthCommandService {
    pub async fn complete_login(
        &self,
        command: CompleteLoginCommand,
    ) -> ApplicationResult<CompleteLoginResult> {
        let provider = self.resolve_provider(&command.provider)?;

        if let Some(error) = command.error.as_deref() {
            let description = command.error_description.as_deref().unwrap_or("no description");
            tracing::warn!(provider = provider.name(), error, description, "provider reported an error");
            return Err(ApplicationError::validation(format!(
                "provider returned an error: {error}"
            )));
        }

        let code = non_empty(command.code)
            .ok_or_else(|| ApplicationError::validation("missing authorization code"))?;
        let raw_state = non_empty(command.state)
            .ok_or_else(|| ApplicationError::validation("missing state parameter"))?;
        let state = LoginState::decode(&raw_state)?;

        let pending = command
            .pending_login
            .as_deref()
            .and_then(|sealed| self.session_gateway.get_pending_login(sealed))
            .ok_or_else(|| ApplicationError::validation("login flow expired or was never started"))?;

        if pending.provider != provider.name() || pending.nonce != state.nonce {
            tracing::warn!(provider = provider.name(), "callback state does not match pending login");
            return Err(ApplicationError::validation("state mismatch"));
        }

        let profile = provider
            .exchange_code(&code, &pending.pkce_verifier)
            .await
            .map_err(|err| {
                tracing::error!(provider = provider.name(), error = %err, "code exchange failed");
                ApplicationError::infrastructure("error completing user auth")
            })?;

        let claims = SessionClaims::from(profile);
        if !claims.is_authenticated() {
            return Err(ApplicationError::infrastructure(
                "provider returned a profile without an id",
            ));
        }
        let user_id = claims.user_id.clone().unwrap_or_default();

        let session = self.session_gateway.set_session(&claims).map_err(|err| {
            tracing::error!(provider = provider.name(), error = %err, "failed to seal session");
            ApplicationError::infrastructure("error saving session")
        })?;

        let redirect_to = self.redirects.resolve(state.return_to.as_deref());
        tracing::info!(provider = provider.name(), user_id = %user_id, "user signed in");

        Ok(CompleteLoginResult {
            session,
            redirect_to,
            user_id,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
