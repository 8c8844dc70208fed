//! Admin dashboard statistics.

use crate::entity_store::EntityStore;
use casems_core::case::{Case, CaseStatus};
use casems_core::category::Category;
use casems_core::error::Result;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Number of cases listed under "Recent Cases".
pub const RECENT_CASES_LIMIT: usize = 5;

/// One bar of a distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
    /// Share of all cases, 0.0 to 100.0.
    pub percentage: f64,
}

/// Figures shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_cases: usize,
    pub total_categories: usize,
    pub open_cases: usize,
    /// Cases in progress.
    pub active_cases: usize,
    pub closed_cases: usize,
    /// The newest cases, in display order.
    pub recent: Vec<Case>,
    /// One entry per category, in category order.
    pub category_distribution: Vec<DistributionEntry>,
    /// One entry per status: open, in-progress, closed.
    pub status_distribution: Vec<DistributionEntry>,
}

impl DashboardStats {
    /// Computes the dashboard from the current collections.
    pub fn compute(cases: &[Case], categories: &[Category]) -> Self {
        let total = cases.len();
        let share = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };
        let count_status = |status: CaseStatus| cases.iter().filter(|c| c.status == status).count();

        let category_distribution = categories
            .iter()
            .map(|category| {
                let count = cases.iter().filter(|c| c.category == category.name).count();
                DistributionEntry {
                    label: category.name.clone(),
                    count,
                    percentage: share(count),
                }
            })
            .collect();

        let status_distribution = CaseStatus::iter()
            .map(|status| {
                let count = count_status(status);
                DistributionEntry {
                    label: status.to_string(),
                    count,
                    percentage: share(count),
                }
            })
            .collect();

        Self {
            total_cases: total,
            total_categories: categories.len(),
            open_cases: count_status(CaseStatus::Open),
            active_cases: count_status(CaseStatus::InProgress),
            closed_cases: count_status(CaseStatus::Closed),
            recent: cases.iter().take(RECENT_CASES_LIMIT).cloned().collect(),
            category_distribution,
            status_distribution,
        }
    }
}

impl EntityStore {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let cases = self.list_cases().await?;
        let categories = self.list_categories().await?;
        Ok(DashboardStats::compute(&cases, &categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::demo_entity_store;
    use casems_core::notification::NoopNotifier;
    use std::sync::Arc;

    #[test]
    fn test_empty_collections_have_zero_percentages() {
        let stats = DashboardStats::compute(&[], &[]);
        assert_eq!(stats.total_cases, 0);
        assert!(stats.recent.is_empty());
        assert_eq!(stats.status_distribution.len(), 3);
        assert!(stats.status_distribution.iter().all(|e| e.percentage == 0.0));
    }

    #[tokio::test]
    async fn test_demo_dashboard() {
        let store = demo_entity_store(Arc::new(NoopNotifier)).unwrap();
        let stats = store.dashboard_stats().await.unwrap();

        assert_eq!(stats.total_cases, 6);
        assert_eq!(stats.total_categories, 5);
        assert_eq!(stats.active_cases, 3);
        assert_eq!(stats.open_cases, 2);
        assert_eq!(stats.closed_cases, 1);
        assert_eq!(stats.recent.len(), RECENT_CASES_LIMIT);
        assert_eq!(stats.recent[0].id, "1");

        let ip = stats
            .category_distribution
            .iter()
            .find(|e| e.label == "Intellectual Property")
            .unwrap();
        assert_eq!(ip.count, 2);
        assert!((ip.percentage - 100.0 / 3.0).abs() < 1e-9);

        let labels: Vec<&str> = stats
            .status_distribution
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["open", "in-progress", "closed"]);
    }
}
