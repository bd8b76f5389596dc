// src/application/queries/articles/project.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleResponse, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::Article,
};

impl ArticleQueryService {
    /// Shape an article for a (possibly anonymous) viewer: denormalize the
    /// author, take a fresh like count, and resolve the viewer-relative
    /// "has liked" flag. Consistent as of the moment of computation only.
    pub async fn project_for_viewer(
        &self,
        viewer: Option<&AuthenticatedUser>,
        article: Article,
    ) -> ApplicationResult<ArticleResponse> {
        let author = self
            .user_repo
            .find_by_id(article.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let like_count = self.like_repo.count_by_article(article.id).await?;

        let viewer_has_liked = match viewer {
            Some(viewer) => self.has_liked(i64::from(article.id), &viewer.username).await,
            None => false,
        };

        Ok(ArticleResponse::from_parts(
            article,
            author.username.to_string(),
            like_count,
            viewer_has_liked,
        ))
    }

    pub(super) async fn project_all(
        &self,
        viewer: Option<&AuthenticatedUser>,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleResponse>> {
        let mut responses = Vec::with_capacity(articles.len());
        for article in articles {
            responses.push(self.project_for_viewer(viewer, article).await?);
        }
        Ok(responses)
    }
}
