//! Application layer for CaseMS.
//!
//! The two stores the showcase front ends talk to: [`EntityStore`] for
//! cases, categories and comments, and [`SessionStore`] for the mock admin
//! sign-in. [`bootstrap`] wires both from an [`casems_core::config::AppConfig`].

pub mod bootstrap;
pub mod catalog;
pub mod dashboard;
pub mod entity_store;
pub mod session_store;

pub use bootstrap::{AppContext, bootstrap, demo_entity_store};
pub use catalog::RELATED_CASES_LIMIT;
pub use dashboard::{DashboardStats, DistributionEntry, RECENT_CASES_LIMIT};
pub use entity_store::EntityStore;
pub use session_store::SessionStore;
