//! In-memory case repository.

use async_trait::async_trait;
use casems_core::case::{Case, CaseRepository};
use casems_core::error::Result;
use tokio::sync::RwLock;

/// Case repository backed by a `Vec` in display order (newest first).
#[derive(Debug, Default)]
pub struct MemoryCaseRepository {
    cases: RwLock<Vec<Case>>,
}

impl MemoryCaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `cases` in the given display order.
    pub fn with_cases(cases: Vec<Case>) -> Self {
        Self {
            cases: RwLock::new(cases),
        }
    }
}

#[async_trait]
impl CaseRepository for MemoryCaseRepository {
    async fn list_all(&self) -> Result<Vec<Case>> {
        Ok(self.cases.read().await.clone())
    }

    async fn find_by_id(&self, case_id: &str) -> Result<Option<Case>> {
        let cases = self.cases.read().await;
        Ok(cases.iter().find(|c| c.id == case_id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Case>> {
        let cases = self.cases.read().await;
        Ok(cases
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, case: Case) -> Result<()> {
        self.cases.write().await.insert(0, case);
        Ok(())
    }

    async fn replace(&self, case: Case) -> Result<bool> {
        let mut cases = self.cases.write().await;
        match cases.iter_mut().find(|c| c.id == case.id) {
            Some(slot) => {
                *slot = case;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, case_id: &str) -> Result<bool> {
        let mut cases = self.cases.write().await;
        let before = cases.len();
        cases.retain(|c| c.id != case_id);
        Ok(cases.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casems_core::case::NewCase;

    fn new_case(title: &str, category: &str) -> Case {
        Case::create(NewCase {
            title: title.to_string(),
            category: category.to_string(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_insert_prepends() {
        let repo = MemoryCaseRepository::new();
        repo.insert(new_case("first", "A")).await.unwrap();
        repo.insert(new_case("second", "A")).await.unwrap();

        let titles: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_replace_and_delete_missing() {
        let repo = MemoryCaseRepository::new();
        let case = new_case("only", "A");
        repo.insert(case.clone()).await.unwrap();

        assert!(!repo.replace(new_case("ghost", "A")).await.unwrap());
        assert!(!repo.delete("ghost").await.unwrap());
        assert_eq!(repo.list_all().await.unwrap(), vec![case.clone()]);

        let mut renamed = case.clone();
        renamed.title = "renamed".to_string();
        assert!(repo.replace(renamed).await.unwrap());
        assert_eq!(
            repo.find_by_id(&case.id).await.unwrap().unwrap().title,
            "renamed"
        );

        assert!(repo.delete(&case.id).await.unwrap());
        assert!(repo.find_by_id(&case.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let repo = MemoryCaseRepository::new();
        repo.insert(new_case("a", "Family Law")).await.unwrap();
        repo.insert(new_case("b", "Criminal Law")).await.unwrap();
        repo.insert(new_case("c", "Family Law")).await.unwrap();

        let family = repo.list_by_category("Family Law").await.unwrap();
        assert_eq!(family.len(), 2);
        assert_eq!(family[0].title, "c");
        assert!(repo.list_by_category("Tax Law").await.unwrap().is_empty());
    }
}
