// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleDescription, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLE_COLUMNS: &str =
    "id, title, description, content, slug, image_url, author_id, created_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    content: String,
    slug: String,
    image_url: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            content: ArticleContent::new(row.content)?,
            slug: ArticleSlug::new(row.slug)?,
            image_url: row.image_url,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

fn rows_into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

// Offsets past i64::MAX address no row anyway; clamp instead of wrapping
// negative.
fn offset_param(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            content,
            slug,
            image_url,
            author_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, description, content, slug, image_url, author_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, title, description, content, slug, image_url, author_id, created_at",
        )
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(content.as_str())
        .bind(slug.as_str())
        .bind(image_url)
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn exists_by_slug(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = $1)")
                .bind(slug.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(exists.0)
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Article>, u64)> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             ORDER BY created_at DESC, id DESC
             OFFSET $1 LIMIT $2"
        ))
        .bind(offset_param(offset))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((rows_into_articles(rows)?, total.0 as u64))
    }

    async fn list_by_author_page(
        &self,
        author_id: UserId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC
             OFFSET $2 LIMIT $3"
        ))
        .bind(i64::from(author_id))
        .bind(offset_param(offset))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles WHERE author_id = $1")
            .bind(i64::from(author_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((rows_into_articles(rows)?, total.0 as u64))
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(author_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows_into_articles(rows)
    }
}
