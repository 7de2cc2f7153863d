// src/domain/mod.rs
pub mod avatar;
pub mod errors;
pub mod user;
