//! Comment domain module.
//!
//! Comments form a two-level thread: top-level comments own their replies.
//! A stored comment lives in exactly one place, either the top-level
//! collection or the reply list of one top-level comment.

mod model;
pub mod repository;

// Re-export public API
pub use model::{Comment, NewComment};
pub use repository::CommentRepository;
