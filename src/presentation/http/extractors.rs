// src/presentation/http/extractors.rs
use crate::{
    application::{dto::UserDto, error::ApplicationError},
    presentation::http::{cookies, state::HttpState},
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use super::error::HttpError;

/// The signed-in user, read from the session cookie. Rejects with 401 when
/// there is no usable session.
#[derive(Debug, Clone)]
pub struct Authenticated(pub UserDto);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let jar = CookieJar::from_headers(&parts.headers);
        let session = cookies::session_value(&jar);

        let user = app_state
            .services
            .user_queries
            .current_user(session.as_deref())
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
