// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub confirmation_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub confirmation_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// A freshly registered account: disabled until the confirmation token
    /// is redeemed.
    pub fn pending_confirmation(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        confirmation_token: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            is_active: false,
            confirmation_token: Some(confirmation_token),
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub is_active: Option<bool>,
    pub clear_confirmation_token: bool,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            is_active: None,
            clear_confirmation_token: false,
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_confirmation_token_cleared(mut self) -> Self {
        self.clear_confirmation_token = true;
        self
    }
}
