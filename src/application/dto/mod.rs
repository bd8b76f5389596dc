pub mod articles;
pub mod auth;
pub mod pagination;
pub mod users;

pub use articles::ArticleResponse;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use pagination::Page;
pub use users::UserDto;
