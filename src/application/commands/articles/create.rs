// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleContent, ArticleDescription, ArticleSlug, ArticleTitle, NewArticle,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub content: String,
    pub slug: String,
    pub image_url: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<Article> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let content = ArticleContent::new(command.content)?;
        let slug = ArticleSlug::new(command.slug)?;

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        if !author.is_active {
            return Err(ApplicationError::forbidden("account is not activated"));
        }

        // Best-effort pre-check; the store's unique constraint is the
        // race-safe backstop and surfaces the same Conflict kind.
        if self.read_repo.exists_by_slug(&slug).await? {
            return Err(ApplicationError::conflict("slug already exists"));
        }

        let new_article = NewArticle {
            title,
            description,
            content,
            slug,
            image_url: command.image_url,
            author_id: author.id,
            created_at: self.clock.now(),
        };

        Ok(self.write_repo.insert(new_article).await?)
    }
}
