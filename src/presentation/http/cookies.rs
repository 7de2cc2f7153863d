// src/presentation/http/cookies.rs
use super::state::CookieSettings;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

pub const SESSION_COOKIE: &str = "auth_session";
pub const FLOW_COOKIE: &str = "auth_flow";
const FLOW_COOKIE_PATH: &str = "/auth";
const FLOW_COOKIE_MINUTES: i64 = 10;

/// Session cookie carrying the sealed claims.
pub fn session_cookie(sealed: String, settings: &CookieSettings) -> Cookie<'static> {
    let max_age = i64::try_from(settings.session_max_age.as_secs()).unwrap_or(i64::MAX);
    Cookie::build((SESSION_COOKIE, sealed))
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age))
        .build()
}

/// Removal cookie for the session.
pub fn clear_session_cookie(settings: &CookieSettings) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Short-lived cookie holding the sealed pending login between the redirect
/// to the provider and its callback.
pub fn flow_cookie(sealed: String, settings: &CookieSettings) -> Cookie<'static> {
    Cookie::build((FLOW_COOKIE, sealed))
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .path(FLOW_COOKIE_PATH)
        .max_age(Duration::minutes(FLOW_COOKIE_MINUTES))
        .build()
}

pub fn clear_flow_cookie(settings: &CookieSettings) -> Cookie<'static> {
    Cookie::build((FLOW_COOKIE, ""))
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .path(FLOW_COOKIE_PATH)
        .max_age(Duration::ZERO)
        .build()
}

pub fn session_value(jar: &CookieJar) -> Option<String> {
    value_of(jar, SESSION_COOKIE)
}

pub fn flow_value(jar: &CookieJar) -> Option<String> {
    value_of(jar, FLOW_COOKIE)
}

fn value_of(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
