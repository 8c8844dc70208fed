//! Derived case views: library filters, admin search, related cases.

use crate::entity_store::EntityStore;
use casems_core::case::{Case, CaseQuery, admin_matches};
use casems_core::error::Result;

/// Number of related cases shown under a case detail page.
pub const RELATED_CASES_LIMIT: usize = 3;

impl EntityStore {
    /// Cases passing `query`, in display order.
    pub async fn filter_cases(&self, query: &CaseQuery) -> Result<Vec<Case>> {
        let cases = self.list_cases().await?;
        if query.is_empty() {
            return Ok(cases);
        }
        Ok(cases.into_iter().filter(|c| query.matches(c)).collect())
    }

    /// Admin table search over title and category name.
    pub async fn admin_search(&self, term: &str) -> Result<Vec<Case>> {
        let cases = self.list_cases().await?;
        Ok(cases.into_iter().filter(|c| admin_matches(c, term)).collect())
    }

    /// Other cases filed under the same category, at most `limit`.
    ///
    /// An unknown `case_id` yields an empty list.
    pub async fn related_cases(&self, case_id: &str, limit: usize) -> Result<Vec<Case>> {
        let Some(case) = self.get_case(case_id).await? else {
            return Ok(Vec::new());
        };
        let related = self.list_cases_by_category(&case.category).await?;
        Ok(related
            .into_iter()
            .filter(|c| c.id != case.id)
            .take(limit)
            .collect())
    }

    /// Number of cases filed under the category name.
    pub async fn category_case_count(&self, category: &str) -> Result<usize> {
        Ok(self.list_cases_by_category(category).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::demo_entity_store;
    use casems_core::case::{CaseStatus, NewCase};
    use casems_core::notification::NoopNotifier;
    use std::sync::Arc;

    async fn demo() -> EntityStore {
        demo_entity_store(Arc::new(NoopNotifier)).unwrap()
    }

    #[tokio::test]
    async fn test_filter_by_status_and_category() {
        let store = demo().await;

        let in_progress = store
            .filter_cases(&CaseQuery::new().with_status(CaseStatus::InProgress))
            .await
            .unwrap();
        assert_eq!(in_progress.len(), 3);

        let ip_closed = store
            .filter_cases(
                &CaseQuery::new()
                    .with_category("Intellectual Property")
                    .with_status(CaseStatus::Closed),
            )
            .await
            .unwrap();
        assert_eq!(ip_closed.len(), 1);
        assert_eq!(ip_closed[0].title, "Williams Trademark Dispute Resolution");
    }

    #[tokio::test]
    async fn test_search_matches_tags() {
        let store = demo().await;
        let results = store
            .filter_cases(&CaseQuery::new().with_search("Fashion"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);

        let results = store
            .filter_cases(&CaseQuery::new().with_search("data-protection"))
            .await
            .unwrap();
        assert_eq!(results[0].id, "2");
    }

    #[tokio::test]
    async fn test_admin_search() {
        let store = demo().await;
        let results = store.admin_search("law").await.unwrap();
        // only the three "... Law" categories match; no title contains "law"
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_related_cases_excludes_self_and_respects_limit() {
        let store = demo().await;
        let related = store.related_cases("4", RELATED_CASES_LIMIT).await.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "6");

        for i in 0..4 {
            store
                .create_case(NewCase {
                    title: format!("IP {}", i),
                    category: "Intellectual Property".to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        let related = store.related_cases("4", RELATED_CASES_LIMIT).await.unwrap();
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|c| c.id != "4"));
        assert_eq!(related[0].title, "IP 3");

        assert!(store.related_cases("missing", 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_category_case_count() {
        let store = demo().await;
        assert_eq!(
            store
                .category_case_count("Intellectual Property")
                .await
                .unwrap(),
            2
        );
        assert_eq!(store.category_case_count("Tax Law").await.unwrap(), 0);
    }
}
