// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use inkpress::application::dto::AuthenticatedUser;
use inkpress::domain::article::{
    Article, ArticleContent, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle,
};
use inkpress::domain::user::{Email, PasswordHash, User, UserId, Username};

pub struct UserBuilder {
    id: i64,
    username: String,
    email: String,
    is_active: bool,
    confirmation_token: Option<String>,
}

impl UserBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            is_active: true,
            confirmation_token: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn unconfirmed(mut self, token: impl Into<String>) -> Self {
        self.is_active = false;
        self.confirmation_token = Some(token.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: Email::new(self.email).unwrap(),
            password_hash: PasswordHash::new("hashed:secret-pw").unwrap(),
            is_active: self.is_active,
            confirmation_token: self.confirmation_token,
            created_at: Utc::now(),
        }
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            slug: format!("article-{id}"),
            author_id: 1,
            // spread creation times so ordering is deterministic
            created_at: Utc::now() + Duration::seconds(id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            description: ArticleDescription::new("A short description").unwrap(),
            content: ArticleContent::new("Body text").unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            image_url: None,
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: self.created_at,
        }
    }
}

pub fn actor(user: &User) -> AuthenticatedUser {
    let now = Utc::now();
    AuthenticatedUser {
        id: user.id,
        username: user.username.to_string(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
