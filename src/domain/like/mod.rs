pub mod entity;
pub mod repository;

pub use entity::Like;
pub use repository::LikeRepository;
