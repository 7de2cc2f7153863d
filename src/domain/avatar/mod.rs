// src/domain/avatar/mod.rs
pub mod value_objects;

pub use value_objects::{AvatarUrl, HostAllowlist};
