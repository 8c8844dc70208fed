//! In-memory comment repository.

use async_trait::async_trait;
use casems_core::comment::{Comment, CommentRepository};
use casems_core::error::Result;
use tokio::sync::RwLock;

/// Comment repository holding top-level comments, each owning its replies.
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository from top-level comments (replies nested).
    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: RwLock::new(comments),
        }
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn list_all(&self) -> Result<Vec<Comment>> {
        Ok(self.comments.read().await.clone())
    }

    async fn list_top_level(&self, case_id: &str) -> Result<Vec<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.case_id == case_id && c.is_top_level())
            .cloned()
            .collect())
    }

    async fn push_top_level(&self, comment: Comment) -> Result<()> {
        self.comments.write().await.push(comment);
        Ok(())
    }

    async fn push_reply(&self, parent_id: &str, reply: Comment) -> Result<bool> {
        let mut comments = self.comments.write().await;
        match comments.iter_mut().find(|c| c.id == parent_id) {
            Some(parent) => {
                parent.replies.push(reply);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
