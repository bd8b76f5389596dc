// src/application/commands/users/mod.rs
mod confirm;
mod login;
mod password;
mod register;
mod service;

pub use confirm::ConfirmEmailCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
