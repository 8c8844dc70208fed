//! Domain layer for CaseMS.
//!
//! Holds the entity models (cases, categories, comments, users), the
//! repository and cache traits the stores are written against, and the
//! small boundary contracts (notifications, routes, configuration) shared by
//! the other crates.

pub mod auth;
pub mod case;
pub mod category;
pub mod comment;
pub mod config;
pub mod error;
pub mod notification;
pub mod route;
pub mod timestamp;
pub mod user;

// Re-export common error type
pub use error::CasemsError;
