//! Case domain module.
//!
//! # Module Structure
//!
//! - `model`: `Case`, `CaseStatus` and the create/patch inputs
//! - `query`: listing filters used by the public and admin case views
//! - `repository`: Case repository trait for persistence
//!
//! # Usage
//!
//! ```ignore
//! use casems_core::case::{Case, CasePatch, CaseQuery, CaseRepository, CaseStatus, NewCase};
//! ```

mod model;
mod query;
pub mod repository;

// Re-export public API
pub use model::{Case, CasePatch, CaseStatus, NewCase};
pub use query::{CaseQuery, admin_matches};

pub use repository::CaseRepository;
