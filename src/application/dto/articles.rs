use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Viewer-relative projection of an article: stored fields plus the
/// denormalized author, a live like count, and whether the current viewer
/// has liked it. Recomputed on every read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub author_username: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub viewer_has_liked: bool,
}

impl ArticleResponse {
    /// Pure shaping step; the caller supplies a fresh count and viewer flag.
    pub fn from_parts(
        article: Article,
        author_username: String,
        like_count: u64,
        viewer_has_liked: bool,
    ) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            description: article.description.into(),
            content: article.content.into(),
            slug: article.slug.into(),
            image_url: article.image_url,
            author_username,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            like_count,
            viewer_has_liked,
        }
    }
}
