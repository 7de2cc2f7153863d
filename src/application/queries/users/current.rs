use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Rebuild the signed-in user from the sealed session cookie value.
    pub fn current_user(&self, session: Option<&str>) -> ApplicationResult<UserDto> {
        session
            .and_then(|sealed| self.session_gateway.get_session(sealed))
            .and_then(|claims| claims.into_user())
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::unauthorized("not authenticated or session expired"))
    }
}
