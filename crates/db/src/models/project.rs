//! Project (property listing) entity model and DTOs.

use std::collections::BTreeMap;

use realty_core::status::ProjectStatus;
use realty_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One floor plan entry, e.g. `{"name": "3 BHK", "image": "...", "area": "1450 sq ft"}`.
pub type FloorPlan = BTreeMap<String, String>;

/// Named map coordinates, e.g. `{"lat": 17.38, "lng": 78.48}`.
pub type Coordinates = BTreeMap<String, f64>;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub location: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub images: Vec<String>,
    pub hero_image: String,
    pub amenities: Vec<String>,
    pub floor_plans: Json<Vec<FloorPlan>>,
    pub coordinates: Option<Json<Coordinates>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. `PUT` uses the same shape and replaces every
/// field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub location: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub images: Vec<String>,
    pub hero_image: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub floor_plans: Vec<FloorPlan>,
    pub coordinates: Option<Coordinates>,
}
