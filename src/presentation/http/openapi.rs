// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::signup,
        crate::presentation::http::controllers::auth::signin,
        crate::presentation::http::controllers::auth::confirm,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::toggle_like,
        crate::presentation::http::controllers::articles::list_articles_by_username,
        crate::presentation::http::controllers::articles::list_current_user_articles,
        crate::presentation::http::routes::health
    ),
    components(schemas(
        StatusResponse,
        crate::presentation::http::error::ErrorResponse,
        crate::application::dto::ArticleResponse,
        crate::application::dto::UserDto,
        crate::application::dto::AuthTokenDto,
        crate::application::dto::Page<crate::application::dto::ArticleResponse>,
        crate::presentation::http::controllers::articles::CreateArticleRequest,
        crate::presentation::http::controllers::auth::SignupRequest,
        crate::presentation::http::controllers::auth::SigninRequest,
        crate::presentation::http::controllers::auth::SigninResponse,
        crate::presentation::http::controllers::auth::MessageResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Registration, email confirmation, and sign-in."),
        (name = "Articles", description = "Article publishing, listings, and likes."),
        (name = "System", description = "Health and diagnostics.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
