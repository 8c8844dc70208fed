//! Subcommand implementations.
//!
//! Each handler takes the bootstrapped [`casems_application::AppContext`]
//! and prints to stdout. Notifications are printed by the caller once the
//! handler returns.

pub mod auth;
pub mod cases;
pub mod categories;
pub mod comments;
pub mod dashboard;
pub mod route;
