// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::auth::{BeginLoginCommand, CompleteLoginCommand},
    error::ApplicationError,
};
use crate::presentation::http::cookies;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BeginAuthParams {
    /// Frontend URL to return to after signing in.
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Set by the provider when the user denied consent or the request was bad.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/auth/{provider}",
    params(
        ("provider" = String, Path, description = "Identity provider name, e.g. `google`"),
        BeginAuthParams
    ),
    responses(
        (status = 307, description = "Redirect to the provider consent screen."),
        (status = 400, description = "Missing or unknown provider.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn begin_auth(
    Extension(state): Extension<HttpState>,
    Path(provider): Path<String>,
    Query(params): Query<BeginAuthParams>,
    jar: CookieJar,
) -> HttpResult<(CookieJar, Redirect)> {
    let result = state
        .services
        .auth_commands
        .begin_login(BeginLoginCommand {
            provider,
            return_to: params.state,
        })
        .into_http()?;

    let jar = jar.add(cookies::flow_cookie(result.pending_login, &state.cookies));
    Ok((jar, Redirect::temporary(&result.redirect_url)))
}

#[utoipa::path(
    get,
    path = "/auth/{provider}/callback",
    params(
        ("provider" = String, Path, description = "Identity provider name"),
        CallbackParams
    ),
    responses(
        (status = 307, description = "Session established; redirect to the frontend."),
        (status = 400, description = "Bad callback: provider error, missing code or state, or state mismatch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Code exchange or session persistence failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn complete_auth(
    Extension(state): Extension<HttpState>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), (CookieJar, HttpError)> {
    let pending_login = cookies::flow_value(&jar);
    // the flow cookie is single use, whatever the outcome
    let jar = jar.add(cookies::clear_flow_cookie(&state.cookies));

    let result = match state
        .services
        .auth_commands
        .complete_login(CompleteLoginCommand {
            provider,
            code: params.code,
            state: params.state,
            error: params.error,
            error_description: params.error_description,
            pending_login,
        })
        .await
        .into_http()
    {
        Ok(result) => result,
        Err(err) => return Err((jar, err)),
    };

    let jar = jar.add(cookies::session_cookie(result.session, &state.cookies));
    Ok((jar, Redirect::temporary(&result.redirect_to)))
}

#[utoipa::path(
    get,
    path = "/logout/{provider}",
    params(("provider" = String, Path, description = "Identity provider name")),
    responses(
        (status = 200, description = "Session cookie cleared.", body = StatusResponse),
        (status = 400, description = "Missing or unknown provider.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Path(provider): Path<String>,
    jar: CookieJar,
) -> HttpResult<(CookieJar, Json<StatusResponse>)> {
    let session = cookies::session_value(&jar);
    state
        .services
        .auth_commands
        .logout(&provider, session.as_deref())
        .into_http()?;

    let jar = jar.add(cookies::clear_session_cookie(&state.cookies));
    Ok((
        jar,
        Json(StatusResponse {
            status: "logged_out".into(),
        }),
    ))
}

/// Fallback for `/auth`, `/logout` and their trailing-slash variants.
pub async fn missing_provider() -> HttpError {
    HttpError::from_error(ApplicationError::validation("missing provider"))
}
