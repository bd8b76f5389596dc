use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleResponse, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleResponse> {
        let article_id = ArticleId::new(query.article_id)?;
        let article = self
            .read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.project_for_viewer(viewer, article).await
    }
}
