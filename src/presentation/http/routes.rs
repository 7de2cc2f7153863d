// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, avatar, users},
    middleware::{cors::cors_layer, rate_limit::avatar_rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

/// Router with the avatar proxy rate limited.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limit_avatar: bool) -> Router {
    let cors = cors_layer(&state.allowed_origin);

    let avatar_routes = Router::new().route("/avatar", get(avatar::proxy_avatar));
    let avatar_routes = if rate_limit_avatar {
        avatar_routes.layer(avatar_rate_limit_layer())
    } else {
        avatar_routes
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/auth", get(auth::missing_provider))
        .route("/auth/", get(auth::missing_provider))
        .route("/auth/{provider}", get(auth::begin_auth))
        .route("/auth/{provider}/callback", get(auth::complete_auth))
        .route("/logout", get(auth::missing_provider))
        .route("/logout/", get(auth::missing_provider))
        .route("/logout/{provider}", get(auth::logout))
        .route("/user", get(users::current_user))
        .merge(avatar_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
