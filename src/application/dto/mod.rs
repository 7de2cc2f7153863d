pub mod auth;
pub mod avatar;
pub mod sessions;
pub mod users;

pub use auth::{AuthorizationRequest, ProviderProfile};
pub use avatar::AvatarImage;
pub use sessions::{PendingLogin, SessionClaims};
pub use users::UserDto;
