//! Shared response bodies for API handlers.
//!
//! Mutations that do not return the entity answer with a `{ "message": ... }`
//! acknowledgement; creations that only expose the new id add `"id"`.

use realty_core::types::DbId;
use serde::Serialize;

/// `{ "message": "..." }`, optionally with the id of the affected row.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    pub fn with_id(message: &'static str, id: DbId) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}
