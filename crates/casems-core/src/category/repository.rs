//! Category repository trait.

use super::model::Category;
use crate::error::Result;
use async_trait::async_trait;

/// Repository for case categories, kept in insertion order.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists all categories in insertion order.
    async fn list_all(&self) -> Result<Vec<Category>>;

    async fn find_by_id(&self, category_id: &str) -> Result<Option<Category>>;

    /// Appends a category to the end of the collection.
    async fn insert(&self, category: Category) -> Result<()>;

    /// Replaces the stored category with the same ID. Returns `false` when
    /// no such category exists.
    async fn replace(&self, category: Category) -> Result<bool>;

    /// Deletes a category. Returns `false` when no such category exists.
    async fn delete(&self, category_id: &str) -> Result<bool>;
}
