// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use inkpress::application::ApplicationResult;
use inkpress::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use inkpress::application::error::ApplicationError;
use inkpress::application::ports::mail::Mailer;
use inkpress::application::ports::security::{PasswordHasher, TokenManager};
use inkpress::application::ports::time::Clock;
use inkpress::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository, NewArticle,
};
use inkpress::domain::errors::{DomainError, DomainResult};
use inkpress::domain::like::{Like, LikeRepository};
use inkpress::domain::user::{
    Email, NewUser, User, UserId, UserRepository, UserUpdate, Username,
};

// ---------------------------------------------------------------------------
// Repositories

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed an existing user, keeping the id counter ahead of it.
    pub fn seed(&self, user: User) {
        let id = i64::from(user.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.users.lock().unwrap().insert(id, user);
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if users
            .values()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict("email already in use".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id).unwrap(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            confirmation_token: new_user.confirmation_token,
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_confirmation_token(&self, token: &str) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.confirmation_token.as_deref() == Some(token))
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        if update.clear_confirmation_token {
            user.confirmation_token = None;
        }
        Ok(user.clone())
    }
}

/// Backs both the read and the write side of the article store.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, article: Article) {
        let id = i64::from(article.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.articles.lock().unwrap().push(article);
    }

    fn sorted_desc(articles: &[Article]) -> Vec<Article> {
        let mut sorted = articles.to_vec();
        sorted.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        sorted
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles
            .iter()
            .any(|a| a.slug.as_str() == article.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id).unwrap(),
            title: article.title,
            description: article.description,
            content: article.content,
            slug: article.slug,
            image_url: article.image_url,
            author_id: article.author_id,
            created_at: article.created_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .iter()
            .find(|a| a.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn exists_by_slug(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().any(|a| a.slug.as_str() == slug.as_str()))
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Article>, u64)> {
        let articles = self.articles.lock().unwrap();
        let total = articles.len() as u64;
        let page = Self::sorted_desc(&articles)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_by_author_page(
        &self,
        author_id: UserId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let articles = self.articles.lock().unwrap();
        let mine: Vec<Article> = articles
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect();
        let total = mine.len() as u64;
        let page = Self::sorted_desc(&mine)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        let mine: Vec<Article> = articles
            .iter()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(&mine))
    }
}

#[derive(Default)]
pub struct InMemoryLikeRepo {
    likes: Mutex<HashMap<(i64, i64), Like>>,
}

impl InMemoryLikeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.likes.lock().unwrap().len()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepo {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let likes = self.likes.lock().unwrap();
        Ok(likes.contains_key(&(i64::from(user_id), i64::from(article_id))))
    }

    async fn find(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Option<Like>> {
        let likes = self.likes.lock().unwrap();
        Ok(likes
            .get(&(i64::from(user_id), i64::from(article_id)))
            .cloned())
    }

    async fn insert(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Like> {
        let mut likes = self.likes.lock().unwrap();
        let key = (i64::from(user_id), i64::from(article_id));
        if likes.contains_key(&key) {
            return Err(DomainError::Conflict("like already exists".into()));
        }
        let like = Like {
            user_id,
            article_id,
            created_at: Utc::now(),
        };
        likes.insert(key, like.clone());
        Ok(like)
    }

    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        let mut likes = self.likes.lock().unwrap();
        likes.remove(&(i64::from(user_id), i64::from(article_id)));
        Ok(())
    }

    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let likes = self.likes.lock().unwrap();
        Ok(likes
            .values()
            .filter(|l| l.article_id == article_id)
            .count() as u64)
    }
}

/// Simulates losing the insert race: the pair never looks liked up front,
/// yet the insert hits the unique constraint.
pub struct RacingLikeRepo {
    pub inner: InMemoryLikeRepo,
}

#[async_trait]
impl LikeRepository for RacingLikeRepo {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        self.inner.exists(user_id, article_id).await
    }

    async fn find(&self, _user_id: UserId, _article_id: ArticleId) -> DomainResult<Option<Like>> {
        Ok(None)
    }

    async fn insert(&self, _user_id: UserId, _article_id: ArticleId) -> DomainResult<Like> {
        Err(DomainError::Conflict("like already exists".into()))
    }

    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        self.inner.delete(user_id, article_id).await
    }

    async fn count_by_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        self.inner.count_by_article(article_id).await
    }
}

/// Every operation fails as if the store were unreachable.
pub struct FailingLikeRepo;

#[async_trait]
impl LikeRepository for FailingLikeRepo {
    async fn exists(&self, _user_id: UserId, _article_id: ArticleId) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find(&self, _user_id: UserId, _article_id: ArticleId) -> DomainResult<Option<Like>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn insert(&self, _user_id: UserId, _article_id: ArticleId) -> DomainResult<Like> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn delete(&self, _user_id: UserId, _article_id: ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn count_by_article(&self, _article_id: ArticleId) -> DomainResult<u64> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

// ---------------------------------------------------------------------------
// Ports

/// Reversible stand-in for argon2 so tests can assert on stored hashes.
pub struct PlaintextHasher;

#[async_trait]
impl PasswordHasher for PlaintextHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = Utc::now();
        Ok(AuthTokenDto {
            token: format!("token-{}", i64::from(subject.user_id)),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id: i64 = token
            .strip_prefix("token-")
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        let now = Utc::now();
        Ok(AuthenticatedUser {
            id: UserId::new(id).map_err(|_| ApplicationError::unauthorized("invalid token"))?,
            username: format!("user{id}"),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}

pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMail>>,
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub recipient: String,
    pub username: String,
    pub confirmation_url: String,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_confirmation_email(
        &self,
        recipient: &str,
        username: &str,
        confirmation_url: &str,
    ) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            username: username.to_string(),
            confirmation_url: confirmation_url.to_string(),
        });
        Ok(())
    }
}

pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_confirmation_email(
        &self,
        _recipient: &str,
        _username: &str,
        _confirmation_url: &str,
    ) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("mail provider unavailable"))
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Each call advances one second past the last, so inserted rows get
/// strictly increasing timestamps.
pub struct TickingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl TickingClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}
