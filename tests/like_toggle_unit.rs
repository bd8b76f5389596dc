use std::sync::Arc;

use chrono::Utc;

mod support;

use inkpress::application::commands::articles::{ArticleCommandService, ToggleLikeCommand};
use inkpress::application::error::ApplicationError;
use inkpress::domain::like::LikeRepository;
use support::{
    ArticleBuilder, FixedClock, InMemoryArticleRepo, InMemoryLikeRepo, InMemoryUserRepo,
    RacingLikeRepo, UserBuilder, actor,
};

struct Fixture {
    service: ArticleCommandService,
    likes: Arc<InMemoryLikeRepo>,
}

fn fixture_with_likes(likes: Arc<dyn LikeRepository>) -> ArticleCommandService {
    let users = Arc::new(InMemoryUserRepo::new());
    let articles = Arc::new(InMemoryArticleRepo::new());
    users.seed(UserBuilder::new(1).build());
    users.seed(UserBuilder::new(2).build());
    articles.seed(ArticleBuilder::new(10).build());
    ArticleCommandService::new(
        Arc::clone(&articles) as _,
        Arc::clone(&articles) as _,
        likes,
        users,
        Arc::new(FixedClock(Utc::now())),
    )
}

fn fixture() -> Fixture {
    let likes = Arc::new(InMemoryLikeRepo::new());
    let service = fixture_with_likes(Arc::clone(&likes) as _);
    Fixture { service, likes }
}

#[tokio::test]
async fn toggle_alternates_between_liked_and_not_liked() {
    let fx = fixture();
    let viewer = UserBuilder::new(1).build();

    for round in 0..5 {
        fx.service
            .toggle_like(&actor(&viewer), ToggleLikeCommand { article_id: 10 })
            .await
            .unwrap();

        let liked = fx
            .likes
            .exists(viewer.id, ArticleBuilder::new(10).build().id)
            .await
            .unwrap();
        // odd number of toggles means liked
        assert_eq!(liked, round % 2 == 0, "round {round}");
    }
}

#[tokio::test]
async fn toggle_converges_when_insert_loses_race() {
    let likes = Arc::new(RacingLikeRepo {
        inner: InMemoryLikeRepo::new(),
    });
    let service = fixture_with_likes(likes as _);
    let viewer = UserBuilder::new(1).build();

    // find sees no like, insert hits the unique constraint; the toggle
    // still reports success because the pair ended up liked.
    service
        .toggle_like(&actor(&viewer), ToggleLikeCommand { article_id: 10 })
        .await
        .unwrap();
}

#[tokio::test]
async fn likes_from_different_users_are_independent() {
    let fx = fixture();
    let first = UserBuilder::new(1).build();
    let second = UserBuilder::new(2).build();
    let article_id = ArticleBuilder::new(10).build().id;

    fx.service
        .toggle_like(&actor(&first), ToggleLikeCommand { article_id: 10 })
        .await
        .unwrap();
    fx.service
        .toggle_like(&actor(&second), ToggleLikeCommand { article_id: 10 })
        .await
        .unwrap();
    assert_eq!(fx.likes.count_by_article(article_id).await.unwrap(), 2);

    // one user unliking does not disturb the other's like
    fx.service
        .toggle_like(&actor(&first), ToggleLikeCommand { article_id: 10 })
        .await
        .unwrap();
    assert_eq!(fx.likes.count_by_article(article_id).await.unwrap(), 1);
    assert!(fx.likes.exists(second.id, article_id).await.unwrap());
    assert!(!fx.likes.exists(first.id, article_id).await.unwrap());
}

#[tokio::test]
async fn deleting_an_absent_like_is_a_no_op() {
    let fx = fixture();
    let viewer = UserBuilder::new(1).build();
    let article_id = ArticleBuilder::new(10).build().id;

    fx.likes.delete(viewer.id, article_id).await.unwrap();
    assert_eq!(fx.likes.count_by_article(article_id).await.unwrap(), 0);
}

#[tokio::test]
async fn toggle_missing_article_is_not_found() {
    let fx = fixture();
    let viewer = UserBuilder::new(1).build();

    let err = fx
        .service
        .toggle_like(&actor(&viewer), ToggleLikeCommand { article_id: 999 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn toggle_rejects_non_positive_article_id() {
    let fx = fixture();
    let viewer = UserBuilder::new(1).build();

    let err = fx
        .service
        .toggle_like(&actor(&viewer), ToggleLikeCommand { article_id: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}
