//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod analytics;
pub mod blog_post;
pub mod inquiry;
pub mod project;
pub mod resource;
pub mod transaction;
pub mod user;
