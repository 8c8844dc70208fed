//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `state`: the two-state session machine (`AuthState`)
//! - `cache`: the external key/value cache with expiry that remembers a
//!   session across restarts
//! - `password`: password-reset input validation

mod cache;
mod password;
mod state;

// Re-export public API
pub use cache::SessionCache;
pub use password::{PasswordResetError, validate_new_password};
pub use state::AuthState;
