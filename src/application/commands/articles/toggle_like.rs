// src/application/commands/articles/toggle_like.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::Article, article::ArticleId, errors::DomainError},
};

pub struct ToggleLikeCommand {
    pub article_id: i64,
}

impl ArticleCommandService {
    /// Flip the (user, article) like fact: present -> delete, absent ->
    /// insert. Returns the unchanged article; callers re-project to observe
    /// the new count and viewer flag.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<Article> {
        let article_id = ArticleId::new(command.article_id)?;
        let article = self
            .read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let existing = self.like_repo.find(user.id, article.id).await?;
        match existing {
            Some(like) => {
                self.like_repo.delete(like.user_id, like.article_id).await?;
            }
            None => {
                match self.like_repo.insert(user.id, article.id).await {
                    Ok(_) => {}
                    // A concurrent toggle won the insert race; the pair is
                    // already in the liked state, which is the outcome this
                    // request wanted. Converge instead of failing.
                    Err(DomainError::Conflict(_)) => {
                        tracing::debug!(
                            article_id = %article.id,
                            user_id = %user.id,
                            "like insert lost a race, treating as liked"
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        Ok(article)
    }
}
