pub mod avatar;
pub mod users;
