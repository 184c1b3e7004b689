//! Domain types shared by the database, payments, and API crates.
//!
//! Nothing in here performs I/O: ids, timestamps, the [`error::CoreError`]
//! taxonomy, the enumerated fields every entity carries, and the input
//! validation helpers handlers call before touching the store.

pub mod error;
pub mod roles;
pub mod status;
pub mod types;
pub mod validation;
