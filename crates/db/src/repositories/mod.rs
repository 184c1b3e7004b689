//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod blog_post_repo;
pub mod favorite_repo;
pub mod inquiry_repo;
pub mod project_repo;
pub mod resource_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use blog_post_repo::BlogPostRepo;
pub use favorite_repo::FavoriteRepo;
pub use inquiry_repo::InquiryRepo;
pub use project_repo::ProjectRepo;
pub use resource_repo::ResourceRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
