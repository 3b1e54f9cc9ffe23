//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod movie_repo;
pub mod recommendation_repo;
pub mod review_like_repo;
pub mod review_repo;
pub mod user_repo;
pub mod watchlist_repo;

pub use comment_repo::CommentRepo;
pub use movie_repo::MovieRepo;
pub use recommendation_repo::RecommendationRepo;
pub use review_like_repo::ReviewLikeRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
pub use watchlist_repo::WatchlistRepo;
