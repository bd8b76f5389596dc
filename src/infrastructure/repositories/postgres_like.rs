// src/infrastructure/repositories/postgres_like.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::like::{Like, LikeRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LikeRow {
    user_id: i64,
    article_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<LikeRow> for Like {
    type Error = DomainError;

    fn try_from(row: LikeRow) -> Result<Self, Self::Error> {
        Ok(Like {
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE user_id = $1 AND article_id = $2)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(exists.0)
    }

    async fn find(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Option<Like>> {
        let row = sqlx::query_as::<_, LikeRow>(
            "SELECT user_id, article_id, created_at FROM likes
             WHERE user_id = $1 AND article_id = $2",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Like::try_from).transpose()
    }

    async fn insert(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Like> {
        let row = sqlx::query_as::<_, LikeRow>(
            "INSERT INTO likes (user_id, article_id, created_at)
             VALUES ($1, $2, NOW())
             RETURNING user_id, article_id, created_at",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Like::try_from(row)
    }

    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        // No rows affected is fine: deleting an absent fact is a no-op.
        sqlx::query("DELETE FROM likes WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user_id))
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count.0 as u64)
    }
}
