use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserUpdate,
};

pub struct ConfirmEmailCommand {
    pub token: String,
}

impl UserCommandService {
    /// Redeem a confirmation token: activate the account and clear the
    /// token so it cannot be replayed.
    pub async fn confirm_email(&self, command: ConfirmEmailCommand) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_confirmation_token(&command.token)
            .await?
            .ok_or_else(|| ApplicationError::not_found("invalid or expired token"))?;

        let update = UserUpdate::new(user.id)
            .with_is_active(true)
            .with_confirmation_token_cleared();
        let activated = self.user_repo.update(update).await?;

        Ok(activated.into())
    }
}
