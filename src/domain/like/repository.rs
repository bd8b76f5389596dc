use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::like::entity::Like;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Store of (user, article) like facts. The store enforces at most one fact
/// per pair; a duplicate insert fails with `DomainError::Conflict`.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;

    async fn find(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Option<Like>>;

    async fn insert(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Like>;

    /// Deleting an absent fact is a no-op, not an error.
    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()>;

    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}
