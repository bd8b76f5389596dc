// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Response, StatusCode};
use chrono::Utc;
use serde_json::Value;

use inkpress::application::services::ApplicationServices;
use inkpress::presentation::http::routes::build_router;
use inkpress::presentation::http::state::HttpState;

use super::mocks::{
    InMemoryArticleRepo, InMemoryLikeRepo, InMemoryUserRepo, PlaintextHasher, RecordingMailer,
    StaticTokenManager, TickingClock,
};

pub struct TestBackend {
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub likes: Arc<InMemoryLikeRepo>,
    pub mailer: Arc<RecordingMailer>,
}

/// A router wired against in-memory stores, plus handles to those stores
/// for seeding and assertions.
pub fn make_test_router() -> (Router, TestBackend) {
    let users = Arc::new(InMemoryUserRepo::new());
    let articles = Arc::new(InMemoryArticleRepo::new());
    let likes = Arc::new(InMemoryLikeRepo::new());
    let mailer = Arc::new(RecordingMailer::new());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&users) as _,
        Arc::clone(&articles) as _,
        Arc::clone(&articles) as _,
        Arc::clone(&likes) as _,
        Arc::new(PlaintextHasher),
        Arc::new(StaticTokenManager),
        Arc::clone(&mailer) as _,
        Arc::new(TickingClock::new(Utc::now())),
        "http://localhost:8080".into(),
    ));

    let router = build_router(HttpState { services });
    let backend = TestBackend {
        users,
        articles,
        likes,
        mailer,
    };
    (router, backend)
}

pub async fn json_body(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes)));
    (status, value)
}
