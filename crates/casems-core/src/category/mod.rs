//! Category domain module.
//!
//! Categories are looked up by name from cases; there is no referential
//! integrity between the two collections.

mod model;
pub mod repository;

// Re-export public API
pub use model::{Category, CategoryPatch, NewCategory};
pub use repository::CategoryRepository;
