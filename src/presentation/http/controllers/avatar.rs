// src/presentation/http/controllers/avatar.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::Query,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use headers::{CacheControl, HeaderMapExt};
use serde::Deserialize;
use std::time::Duration;
use utoipa::IntoParams;

const AVATAR_CACHE_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24);
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvatarParams {
    /// Absolute http(s) URL of the image on an allowlisted host.
    #[serde(default)]
    pub url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/avatar",
    params(AvatarParams),
    responses(
        (status = 200, description = "Image bytes with the upstream content type."),
        (status = 400, description = "Missing or malformed url.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Host is not allowlisted.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests."),
        (status = 502, description = "Upstream fetch failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Avatar"
)]
pub async fn proxy_avatar(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AvatarParams>,
) -> HttpResult<Response> {
    let image = state
        .services
        .avatar_queries
        .fetch_avatar(params.url.as_deref())
        .await
        .into_http()?;

    let content_type = image
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));

    let mut response = (StatusCode::OK, image.body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.typed_insert(
        CacheControl::new()
            .with_public()
            .with_max_age(AVATAR_CACHE_MAX_AGE),
    );

    Ok(response)
}
