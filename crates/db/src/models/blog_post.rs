//! Blog post entity model and DTOs.

use realty_core::status::BlogCategory;
use realty_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Byline used when a post does not name one.
pub const DEFAULT_AUTHOR: &str = "HTY REALTY";

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[sqlx(try_from = "String")]
    pub category: BlogCategory,
    pub image: String,
    pub author: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: BlogCategory,
    pub image: String,
    /// Defaults to [`DEFAULT_AUTHOR`].
    pub author: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}
