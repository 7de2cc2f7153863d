// src/application/ports/mod.rs
pub mod avatar;
pub mod identity;
pub mod session;

// Trait-object aliases for injection sites
pub type SessionGatewayPort = dyn session::SessionGateway;
pub type AvatarFetcherPort = dyn avatar::AvatarFetcher;
