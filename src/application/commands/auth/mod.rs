mod begin;
mod complete;
mod logout;
mod redirect;
mod service;
mod state;

pub use begin::{BeginLoginCommand, BeginLoginResult};
pub use complete::{CompleteLoginCommand, CompleteLoginResult};
pub use redirect::RedirectPolicy;
pub use service::AuthCommandService;
pub use state::LoginState;
