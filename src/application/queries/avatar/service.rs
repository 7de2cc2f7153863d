use std::sync::Arc;

use crate::application::ports::avatar::AvatarFetcher;
use crate::domain::avatar::HostAllowlist;

pub struct AvatarQueryService {
    pub(super) fetcher: Arc<dyn AvatarFetcher>,
    pub(super) allowlist: HostAllowlist,
}

impl AvatarQueryService {
    pub fn new(fetcher: Arc<dyn AvatarFetcher>, allowlist: HostAllowlist) -> Self {
        Self { fetcher, allowlist }
    }
}
