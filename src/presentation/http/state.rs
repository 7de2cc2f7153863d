// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub cookies: CookieSettings,
    /// Serialized frontend origin, e.g. `http://localhost:5173`.
    pub allowed_origin: String,
}

#[derive(Clone, Debug)]
pub struct CookieSettings {
    /// Adds `Secure`; enabled in production.
    pub secure: bool,
    pub session_max_age: Duration,
}
