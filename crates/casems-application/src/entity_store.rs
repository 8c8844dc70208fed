//! Entity store: cases, categories and comment threads.

use casems_core::case::{Case, CasePatch, CaseRepository, NewCase};
use casems_core::category::{Category, CategoryPatch, CategoryRepository, NewCategory};
use casems_core::comment::{Comment, CommentRepository, NewComment};
use casems_core::error::Result;
use casems_core::notification::{Notification, Notifier};
use std::sync::Arc;

/// Owns the three entity collections and every operation on them.
///
/// Operations follow an optimistic contract: updating or deleting an ID that
/// does not exist is a silent no-op (`None` / `false`), and the success
/// notification is raised either way. `Err` only comes from the repository
/// backend itself.
pub struct EntityStore {
    case_repository: Arc<dyn CaseRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    notifier: Arc<dyn Notifier>,
}

impl EntityStore {
    pub fn new(
        case_repository: Arc<dyn CaseRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            case_repository,
            category_repository,
            comment_repository,
            notifier,
        }
    }

    fn notify(&self, title: &str, description: &str) {
        self.notifier.notify(Notification::new(title, description));
    }

    // ============================================================================
    // Cases
    // ============================================================================

    /// Lists all cases, newest first.
    pub async fn list_cases(&self) -> Result<Vec<Case>> {
        self.case_repository.list_all().await
    }

    pub async fn get_case(&self, case_id: &str) -> Result<Option<Case>> {
        self.case_repository.find_by_id(case_id).await
    }

    /// Lists the cases whose category name equals `category`.
    pub async fn list_cases_by_category(&self, category: &str) -> Result<Vec<Case>> {
        self.case_repository.list_by_category(category).await
    }

    /// Creates a case and places it first in display order.
    pub async fn create_case(&self, fields: NewCase) -> Result<Case> {
        let case = Case::create(fields);
        self.case_repository.insert(case.clone()).await?;
        tracing::info!("[EntityStore] Created case {} '{}'", case.id, case.title);
        self.notify("Case created", "The case has been successfully created.");
        Ok(case)
    }

    /// Merges `patch` into the case and refreshes its `updated_at`.
    ///
    /// Returns the updated case, or `None` when no case has that ID.
    pub async fn update_case(&self, case_id: &str, patch: CasePatch) -> Result<Option<Case>> {
        let updated = match self.case_repository.find_by_id(case_id).await? {
            Some(mut case) => {
                case.apply(patch);
                if self.case_repository.replace(case.clone()).await? {
                    tracing::info!("[EntityStore] Updated case {}", case_id);
                    Some(case)
                } else {
                    None
                }
            }
            None => None,
        };

        if updated.is_none() {
            tracing::debug!("[EntityStore] Update of unknown case {} ignored", case_id);
        }
        self.notify("Case updated", "The case has been successfully updated.");
        Ok(updated)
    }

    /// Removes a case. Returns whether anything was removed.
    pub async fn delete_case(&self, case_id: &str) -> Result<bool> {
        let removed = self.case_repository.delete(case_id).await?;
        tracing::info!("[EntityStore] Delete case {} (removed: {})", case_id, removed);
        self.notify("Case deleted", "The case has been successfully deleted.");
        Ok(removed)
    }

    // ============================================================================
    // Categories
    // ============================================================================

    /// Lists all categories in insertion order.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.category_repository.list_all().await
    }

    pub async fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        self.category_repository.find_by_id(category_id).await
    }

    /// Creates a category at the end of the collection.
    pub async fn create_category(&self, fields: NewCategory) -> Result<Category> {
        let category = Category::create(fields);
        self.category_repository.insert(category.clone()).await?;
        tracing::info!(
            "[EntityStore] Created category {} '{}'",
            category.id,
            category.name
        );
        self.notify(
            "Category created",
            "The category has been successfully created.",
        );
        Ok(category)
    }

    /// Merges `patch` into the category.
    ///
    /// Renaming a category does not touch the cases filed under the old name.
    pub async fn update_category(
        &self,
        category_id: &str,
        patch: CategoryPatch,
    ) -> Result<Option<Category>> {
        let updated = match self.category_repository.find_by_id(category_id).await? {
            Some(mut category) => {
                category.apply(patch);
                self.category_repository
                    .replace(category.clone())
                    .await?
                    .then_some(category)
            }
            None => None,
        };

        tracing::info!(
            "[EntityStore] Update category {} (found: {})",
            category_id,
            updated.is_some()
        );
        self.notify(
            "Category updated",
            "The category has been successfully updated.",
        );
        Ok(updated)
    }

    /// Removes a category. Cases filed under it keep their category name.
    pub async fn delete_category(&self, category_id: &str) -> Result<bool> {
        let removed = self.category_repository.delete(category_id).await?;
        tracing::info!(
            "[EntityStore] Delete category {} (removed: {})",
            category_id,
            removed
        );
        self.notify(
            "Category deleted",
            "The category has been successfully deleted.",
        );
        Ok(removed)
    }

    // ============================================================================
    // Comments
    // ============================================================================

    /// Posts a comment.
    ///
    /// Without a parent the comment is appended as a new top-level comment.
    /// With a parent, only top-level comments are searched; when none has
    /// that ID (including when the intended parent is itself a reply) the
    /// comment is dropped and `None` is returned. It is never stored
    /// top-level as a fallback.
    pub async fn add_comment(&self, fields: NewComment) -> Result<Option<Comment>> {
        let comment = Comment::create(fields);

        let stored = match comment.parent_comment_id.clone() {
            Some(parent_id) => {
                let attached = self
                    .comment_repository
                    .push_reply(&parent_id, comment.clone())
                    .await?;
                if !attached {
                    tracing::warn!(
                        "[EntityStore] Dropped reply {}: no top-level comment {}",
                        comment.id,
                        parent_id
                    );
                }
                attached
            }
            None => {
                self.comment_repository
                    .push_top_level(comment.clone())
                    .await?;
                true
            }
        };

        self.notify(
            "Comment added",
            "Your comment has been successfully posted.",
        );
        Ok(stored.then_some(comment))
    }

    /// Lists the top-level comments of a case. Replies are reachable through
    /// each comment's `replies`.
    pub async fn list_top_level_comments(&self, case_id: &str) -> Result<Vec<Comment>> {
        self.comment_repository.list_top_level(case_id).await
    }

    /// Lists every top-level comment across all cases.
    pub async fn list_comments(&self) -> Result<Vec<Comment>> {
        self.comment_repository.list_all().await
    }
}
