pub mod avatar;
pub mod identity;
pub mod security;
