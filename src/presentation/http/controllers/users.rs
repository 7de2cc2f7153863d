// src/presentation/http/controllers/users.rs
use crate::application::dto::UserDto;
use crate::presentation::http::extractors::Authenticated;
use axum::Json;

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "The signed-in user.", body = UserDto),
        (status = 401, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn current_user(Authenticated(user): Authenticated) -> Json<UserDto> {
    Json(user)
}
