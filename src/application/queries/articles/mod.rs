mod by_author;
mod get_by_id;
mod get_by_slug;
mod likes;
mod list;
mod project;
mod service;

pub use by_author::ListArticlesByUsernameQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
