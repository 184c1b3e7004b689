//! Repository for the `blog_posts` table.

use realty_core::status::BlogCategory;
use realty_core::types::new_id;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, DEFAULT_AUTHOR};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, excerpt, content, category, image, author, published, \
                       created_at, updated_at";

/// Provides create and read operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (id, title, slug, excerpt, content, category, image, author, published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(input.category.as_str())
            .bind(&input.image)
            .bind(input.author.as_deref().unwrap_or(DEFAULT_AUTHOR))
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a post by slug (exact match), published or not.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published posts, newest first, optionally narrowed to a category.
    pub async fn list_published(
        pool: &PgPool,
        category: Option<BlogCategory>,
        limit: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE published = TRUE AND ($1::TEXT IS NULL OR category = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(category.map(BlogCategory::as_str))
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
