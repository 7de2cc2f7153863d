use crate::application::error::{ApplicationError, ApplicationResult};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// The OAuth2 `state` value sent through the provider and echoed back on the
/// callback. `nonce` ties the callback to the flow cookie; `return_to` is the
/// frontend URL the browser asked to come back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
}

impl LoginState {
    pub fn encode(&self) -> ApplicationResult<String> {
        let json = serde_json::to_vec(self)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    pub fn decode(raw: &str) -> ApplicationResult<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(raw.trim())
            .map_err(|_| ApplicationError::validation("invalid state parameter"))?;
        serde_json::from_slice(&bytes)
            .map_err(|_| ApplicationError::validation("invalid state parameter"))
    }
}
