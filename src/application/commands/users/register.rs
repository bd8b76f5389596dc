use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, User, Username},
};
use uuid::Uuid;

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Create a disabled account with a fresh confirmation token and send
    /// the confirmation mail. Registration succeeds even when the mail
    /// cannot be delivered; the account simply stays unconfirmed.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_username_available(&username).await?;
        self.ensure_email_available(&email).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let confirmation_token = Uuid::new_v4().to_string();

        let new_user = NewUser::pending_confirmation(
            username,
            email,
            password_hash,
            confirmation_token,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;

        self.send_confirmation_email(&user).await;

        Ok(user.into())
    }

    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        Ok(())
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already in use"));
        }
        Ok(())
    }

    async fn send_confirmation_email(&self, user: &User) {
        let Some(token) = user.confirmation_token.as_deref() else {
            return;
        };
        let confirmation_url = format!("{}/api/auth/confirm?token={token}", self.app_url);

        if let Err(err) = self
            .mailer
            .send_confirmation_email(user.email.as_str(), user.username.as_str(), &confirmation_url)
            .await
        {
            tracing::warn!(
                user_id = %user.id,
                error = %err,
                "failed to send confirmation email"
            );
        }
    }
}
