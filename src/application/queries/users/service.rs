use std::sync::Arc;

use crate::application::ports::session::SessionGateway;

pub struct UserQueryService {
    pub(super) session_gateway: Arc<dyn SessionGateway>,
}

impl UserQueryService {
    pub fn new(session_gateway: Arc<dyn SessionGateway>) -> Self {
        Self { session_gateway }
    }
}
