//! In-memory category repository.

use async_trait::async_trait;
use casems_core::category::{Category, CategoryRepository};
use casems_core::error::Result;
use tokio::sync::RwLock;

/// Category repository backed by a `Vec` in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        Ok(self.categories.read().await.clone())
    }

    async fn find_by_id(&self, category_id: &str) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == category_id).cloned())
    }

    async fn insert(&self, category: Category) -> Result<()> {
        self.categories.write().await.push(category);
        Ok(())
    }

    async fn replace(&self, category: Category) -> Result<bool> {
        let mut categories = self.categories.write().await;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, category_id: &str) -> Result<bool> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != category_id);
        Ok(categories.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casems_core::category::NewCategory;

    #[tokio::test]
    async fn test_insert_appends() {
        let repo = MemoryCategoryRepository::new();
        for name in ["Criminal Law", "Tax Law"] {
            repo.insert(Category::create(NewCategory {
                name: name.to_string(),
                ..Default::default()
            }))
            .await
            .unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Criminal Law", "Tax Law"]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_false() {
        let repo = MemoryCategoryRepository::new();
        assert!(!repo.delete("missing").await.unwrap());
    }
}
