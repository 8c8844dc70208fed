//! Comment repository trait.

use super::model::Comment;
use crate::error::Result;
use async_trait::async_trait;

/// Repository for comment threads.
///
/// Only top-level comments are addressable; replies are reached through
/// their parent's `replies` list.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Lists every top-level comment (with replies) in insertion order.
    async fn list_all(&self) -> Result<Vec<Comment>>;

    /// Lists the top-level comments of one case in insertion order.
    async fn list_top_level(&self, case_id: &str) -> Result<Vec<Comment>>;

    /// Appends a top-level comment.
    async fn push_top_level(&self, comment: Comment) -> Result<()>;

    /// Appends `reply` to the reply list of the top-level comment
    /// `parent_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Reply attached
    /// - `Ok(false)`: No top-level comment has that ID; nothing stored
    async fn push_reply(&self, parent_id: &str, reply: Comment) -> Result<bool>;
}
