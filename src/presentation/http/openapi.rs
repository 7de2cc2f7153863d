// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::begin_auth,
        crate::presentation::http::controllers::auth::complete_auth,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::users::current_user,
        crate::presentation::http::controllers::avatar::proxy_avatar,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Auth", description = "Provider sign-in, callback and logout"),
        (name = "Users", description = "The signed-in user"),
        (name = "Avatar", description = "Allowlisted avatar image proxy"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Signon API",
        description = "Google sign-in backend with cookie sessions",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_JSON_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Write the pretty-printed document to `path`, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
