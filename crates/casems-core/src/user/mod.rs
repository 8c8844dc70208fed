//! User domain module.
//!
//! # Usage
//!
//! ```ignore
//! use casems_core::user::{Role, User};
//! ```

mod model;

// Re-export public API
pub use model::{Role, User};
