// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// An authored article. Immutable once created; the only state that changes
/// around an article is the set of like facts referencing it.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub content: ArticleContent,
    pub slug: ArticleSlug,
    pub image_url: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub content: ArticleContent,
    pub slug: ArticleSlug,
    pub image_url: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}
