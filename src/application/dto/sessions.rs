use crate::domain::user::{User, UserId};
use serde::{Deserialize, Serialize};

use super::ProviderProfile;

/// Claims carried inside the sealed session cookie.
///
/// A session is authenticated iff `user_id` is present and non-empty; the
/// remaining fields default to empty strings when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_picture: String,
}

impl SessionClaims {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    pub fn into_user(self) -> Option<User> {
        let id = UserId::new(self.user_id?).ok()?;
        Some(User::new(id, self.user_name, self.user_email, self.user_picture))
    }
}

impl From<ProviderProfile> for SessionClaims {
    fn from(profile: ProviderProfile) -> Self {
        Self {
            user_id: Some(profile.id),
            user_name: profile.name,
            user_email: profile.email,
            user_picture: profile.avatar_url,
        }
    }
}

/// State kept in the flow cookie while the browser is at the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLogin {
    pub provider: String,
    pub nonce: String,
    pub pkce_verifier: String,
}
