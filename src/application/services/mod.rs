// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::auth::{AuthCommandService, RedirectPolicy},
        ports::{avatar::AvatarFetcher, identity::IdentityProviders, session::SessionGateway},
        queries::{avatar::AvatarQueryService, users::UserQueryService},
    },
    domain::avatar::HostAllowlist,
};

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub avatar_queries: Arc<AvatarQueryService>,
}

impl ApplicationServices {
    pub fn new(
        providers: IdentityProviders,
        session_gateway: Arc<dyn SessionGateway>,
        avatar_fetcher: Arc<dyn AvatarFetcher>,
        redirects: RedirectPolicy,
        avatar_allowlist: HostAllowlist,
    ) -> Self {
        let auth_commands = Arc::new(AuthCommandService::new(
            providers,
            Arc::clone(&session_gateway),
            redirects,
        ));
        let user_queries = Arc::new(UserQueryService::new(session_gateway));
        let avatar_queries = Arc::new(AvatarQueryService::new(avatar_fetcher, avatar_allowlist));

        Self {
            auth_commands,
            user_queries,
            avatar_queries,
        }
    }
}
