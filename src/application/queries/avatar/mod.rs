mod proxy;
mod service;

pub use service::AvatarQueryService;
