// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug)]
pub struct AppConfig {
    host: String,
    port: u16,
    google: GoogleConfig,
    session_secret: String,
    session_max_age: Duration,
    is_production: bool,
    frontend_origin: Url,
    default_redirect_path: String,
    avatar_allowed_hosts: Vec<String>,
    avatar_rate_limit: bool,
}

#[derive(Clone, Debug)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "localhost".into()
}

fn default_frontend_origin() -> String {
    "http://localhost:5173".into()
}

fn default_scopes() -> Vec<String> {
    vec!["email".into(), "profile".into()]
}

fn default_avatar_hosts() -> Vec<String> {
    vec![
        "googleusercontent.com".into(),
        "ggpht.com".into(),
        "gravatar.com".into(),
    ]
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl AppConfig {
    /// Build configuration from the process environment. Callers load any
    /// `.env` file beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values are
    /// treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = get("HOST").unwrap_or_else(default_host);
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got '{raw}'")))?,
            None => default_port(),
        };

        let client_id = require("GOOGLE_CLIENT_ID")?;
        let client_secret = require("GOOGLE_CLIENT_SECRET")?;
        let session_secret = require("SESSION_SECRET")?;

        let callback_url = get("AUTH_CALLBACK_URL")
            .unwrap_or_else(|| format!("http://{host}:{port}/auth/google/callback"));
        Url::parse(&callback_url).map_err(|err| {
            ConfigError::Invalid(format!("AUTH_CALLBACK_URL is not a valid URL: {err}"))
        })?;

        let scopes = get("GOOGLE_SCOPES")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_scopes);

        let session_max_age_secs = match get("SESSION_MAX_AGE_SECONDS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("SESSION_MAX_AGE_SECONDS must be an integer, got '{raw}'"))
            })?,
            None => DEFAULT_SESSION_MAX_AGE_SECS,
        };

        let is_production = get("ENV").is_some_and(|v| v.trim() == "production");

        let frontend_origin_raw = get("FRONTEND_ORIGIN").unwrap_or_else(default_frontend_origin);
        let frontend_origin = Url::parse(&frontend_origin_raw).map_err(|err| {
            ConfigError::Invalid(format!("FRONTEND_ORIGIN is not a valid URL: {err}"))
        })?;
        if frontend_origin.host_str().is_none() {
            return Err(ConfigError::Invalid("FRONTEND_ORIGIN must include a host".into()));
        }

        let default_redirect_path = get("DEFAULT_REDIRECT_PATH").unwrap_or_else(|| "/".into());
        if !default_redirect_path.starts_with('/') {
            return Err(ConfigError::Invalid(
                "DEFAULT_REDIRECT_PATH must start with '/'".into(),
            ));
        }

        let avatar_allowed_hosts = get("AVATAR_ALLOWED_HOSTS")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(default_avatar_hosts);

        let avatar_rate_limit = get("AVATAR_RATE_LIMIT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            google: GoogleConfig {
                client_id,
                client_secret,
                callback_url,
                scopes,
            },
            session_secret,
            session_max_age: Duration::from_secs(session_max_age_secs),
            is_production,
            frontend_origin,
            default_redirect_path,
            avatar_allowed_hosts,
            avatar_rate_limit,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn google(&self) -> &GoogleConfig {
        &self.google
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    pub fn session_max_age(&self) -> Duration {
        self.session_max_age
    }

    /// `ENV=production` switches session cookies to `Secure`.
    pub fn is_production(&self) -> bool {
        self.is_production
    }

    pub fn frontend_origin(&self) -> &Url {
        &self.frontend_origin
    }

    pub fn default_redirect_path(&self) -> &str {
        &self.default_redirect_path
    }

    pub fn avatar_allowed_hosts(&self) -> &[String] {
        &self.avatar_allowed_hosts
    }

    pub fn avatar_rate_limit(&self) -> bool {
        self.avatar_rate_limit
    }
}
