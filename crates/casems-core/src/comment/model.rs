//! Comment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timestamp;

/// A reader comment on a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// The case this comment belongs to.
    pub case_id: String,
    /// Author display name.
    pub author: String,
    /// Author email. The format is not checked.
    pub email: String,
    pub body: String,
    /// `None` for a top-level comment.
    pub parent_comment_id: Option<String>,
    /// Replies, oldest first. Only populated on top-level comments.
    #[serde(default)]
    pub replies: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied fields of a new comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub case_id: String,
    pub author: String,
    pub email: String,
    pub body: String,
    #[serde(default)]
    pub parent_comment_id: Option<String>,
}

impl NewComment {
    /// A top-level comment on `case_id`.
    pub fn new(
        case_id: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            author: author.into(),
            email: email.into(),
            body: body.into(),
            parent_comment_id: None,
        }
    }

    /// Marks this comment as a reply to `parent_comment_id`.
    pub fn in_reply_to(mut self, parent_comment_id: impl Into<String>) -> Self {
        self.parent_comment_id = Some(parent_comment_id.into());
        self
    }
}

impl Comment {
    /// Builds a comment with a fresh UUID, the current time and no replies.
    ///
    /// An empty `parent_comment_id` is treated as absent.
    pub fn create(fields: NewComment) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            case_id: fields.case_id,
            author: fields.author,
            email: fields.email,
            body: fields.body,
            parent_comment_id: fields.parent_comment_id.filter(|id| !id.is_empty()),
            replies: Vec::new(),
            created_at: timestamp::now(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_comment_id.is_none()
    }

    /// Number of comments in this thread, including this one.
    pub fn thread_len(&self) -> usize {
        1 + self.replies.iter().map(Comment::thread_len).sum::<usize>()
    }
}
