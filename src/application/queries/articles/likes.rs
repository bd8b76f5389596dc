// src/application/queries/articles/likes.rs
use super::ArticleQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
    domain::user::Username,
};

impl ArticleQueryService {
    /// Live like count for an existing article.
    pub async fn count_likes(&self, article_id: i64) -> ApplicationResult<u64> {
        let article_id = ArticleId::new(article_id)?;
        self.read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(self.like_repo.count_by_article(article_id).await?)
    }

    /// Whether `username` has liked the article. Advisory only: resolution
    /// or store failures yield `false` so a like-status lookup never blocks
    /// a successful read. Failures are logged rather than fully swallowed.
    pub async fn has_liked(&self, article_id: i64, username: &str) -> bool {
        match self.has_liked_inner(article_id, username).await {
            Ok(liked) => liked,
            Err(err) => {
                tracing::warn!(
                    article_id,
                    username,
                    error = %err,
                    "like-status lookup failed, reporting not liked"
                );
                false
            }
        }
    }

    async fn has_liked_inner(
        &self,
        article_id: i64,
        username: &str,
    ) -> ApplicationResult<bool> {
        let article_id = ArticleId::new(article_id)?;
        let username = Username::new(username)?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        self.read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(self.like_repo.exists(user.id, article_id).await?)
    }
}
