// src/application/queries/articles/by_author.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleResponse, AuthenticatedUser, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct ListArticlesByUsernameQuery {
    pub username: String,
    pub page: u64,
    pub size: u32,
}

impl ArticleQueryService {
    /// Paginated listing of one author's articles. The author is resolved
    /// by username first; an unknown username is a NotFound, not an empty
    /// page.
    pub async fn list_articles_by_username(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListArticlesByUsernameQuery,
    ) -> ApplicationResult<Page<ArticleResponse>> {
        let username = Username::new(query.username)?;
        let author = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("user not found: {username}"))
            })?;

        let size = Self::normalize_size(query.size);
        let offset = query.page.saturating_mul(u64::from(size));

        let (articles, total) = self
            .read_repo
            .list_by_author_page(author.id, offset, size)
            .await?;
        let items = self.project_all(viewer, articles).await?;

        Ok(Page::new(items, total, query.page, size))
    }

    /// All of the acting user's own articles, unpaginated.
    pub async fn list_current_user_articles(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleResponse>> {
        let articles = self.read_repo.list_by_author(actor.id).await?;
        self.project_all(Some(actor), articles).await
    }
}
