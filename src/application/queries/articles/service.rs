use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, like::LikeRepository, user::UserRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        like_repo: Arc<dyn LikeRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            like_repo,
            user_repo,
        }
    }

    pub(super) const DEFAULT_PAGE_SIZE: u32 = 10;
    pub(super) const MAX_PAGE_SIZE: u32 = 100;

    pub(super) fn normalize_size(size: u32) -> u32 {
        if size == 0 {
            Self::DEFAULT_PAGE_SIZE
        } else {
            size.min(Self::MAX_PAGE_SIZE)
        }
    }
}
