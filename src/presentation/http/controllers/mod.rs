// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod avatar;
pub mod users;
