use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert a new article. The store's unique constraint on the slug is
    /// the race-safe backstop behind the command service's existence check.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn exists_by_slug(&self, slug: &ArticleSlug) -> DomainResult<bool>;

    /// Page of all articles ordered `created_at DESC, id DESC`, with the
    /// total element count.
    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Article>, u64)>;

    /// Page of one author's articles, same ordering and total semantics.
    async fn list_by_author_page(
        &self,
        author_id: UserId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)>;

    /// All of one author's articles, newest first.
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>>;
}
