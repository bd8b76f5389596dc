use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleResponse, AuthenticatedUser, Page},
    error::ApplicationResult,
};

pub struct ListArticlesQuery {
    /// Zero-based page index.
    pub page: u64,
    pub size: u32,
}

impl ArticleQueryService {
    /// Global listing, newest first.
    pub async fn list_articles(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleResponse>> {
        let size = Self::normalize_size(query.size);
        let offset = query.page.saturating_mul(u64::from(size));

        let (articles, total) = self.read_repo.list_page(offset, size).await?;
        let items = self.project_all(viewer, articles).await?;

        Ok(Page::new(items, total, query.page, size))
    }
}
