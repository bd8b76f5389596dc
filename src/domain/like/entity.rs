// src/domain/like/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A like fact. Its identity is the (user, article) pair; presence means
/// "liked", absence means "not liked". There is no update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}
