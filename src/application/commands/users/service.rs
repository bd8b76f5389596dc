// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::ports::{
    mail::Mailer,
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) app_url: String,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        app_url: String,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            mailer,
            clock,
            app_url,
        }
    }
}
