// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, ToggleLikeCommand},
    dto::{ArticleResponse, Page},
    queries::articles::{
        GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesByUsernameQuery, ListArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

fn default_size() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u32,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub slug: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index."),
        ("size" = Option<u32>, Query, description = "Page size.")
    ),
    responses((status = 200, description = "Page of articles, newest first.", body = Page<ArticleResponse>)),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleResponse>>> {
    state
        .services
        .article_queries
        .list_articles(
            viewer.0.as_ref(),
            ListArticlesQuery {
                page: params.page,
                size: params.size,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "The created article.", body = ArticleResponse),
        (status = 409, description = "Slug already exists.")
    ),
    security(("bearer_auth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = CreateArticleCommand {
        title: payload.title,
        description: payload.description,
        content: payload.content,
        slug: payload.slug,
        image_url: payload.image_url,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    state
        .services
        .article_queries
        .project_for_viewer(Some(&user), article)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 404, description = "Article not found.")
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(viewer.0.as_ref(), GetArticleByIdQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/slug/{slug}",
    params(("slug" = String, Path, description = "Article slug.")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 404, description = "Article not found.")
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_slug(viewer.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/likes",
    params(("id" = i64, Path, description = "Article id.")),
    responses(
        (status = 200, description = "The article with the flipped like state.", body = ArticleResponse),
        (status = 404, description = "Article not found.")
    ),
    security(("bearer_auth" = [])),
    tag = "Articles"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_commands
        .toggle_like(&user, ToggleLikeCommand { article_id: id })
        .await
        .into_http()?;

    // Re-project so the response reflects the flipped state.
    state
        .services
        .article_queries
        .project_for_viewer(Some(&user), article)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/user/{username}",
    params(
        ("username" = String, Path, description = "Author username."),
        ("page" = Option<u64>, Query, description = "Zero-based page index."),
        ("size" = Option<u32>, Query, description = "Page size.")
    ),
    responses(
        (status = 200, description = "Page of the author's articles.", body = Page<ArticleResponse>),
        (status = 404, description = "Unknown username.")
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_username(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(username): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ArticleResponse>>> {
    state
        .services
        .article_queries
        .list_articles_by_username(
            viewer.0.as_ref(),
            ListArticlesByUsernameQuery {
                username,
                page: params.page,
                size: params.size,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/user",
    responses((status = 200, description = "All of the caller's articles.", body = [ArticleResponse])),
    security(("bearer_auth" = [])),
    tag = "Articles"
)]
pub async fn list_current_user_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleResponse>>> {
    state
        .services
        .article_queries
        .list_current_user_articles(&user)
        .await
        .into_http()
        .map(Json)
}
