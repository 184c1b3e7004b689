pub mod analytics;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod favorite;
pub mod payment;
pub mod project;
pub mod resource;
