//! Case listing filters.

use super::model::{Case, CaseStatus};

/// Filter used by the public case library.
///
/// `search` is matched case-insensitively against the title, the
/// description and every tag. `category` and `status` are exact filters;
/// `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseQuery {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<CaseStatus>,
}

impl CaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.status.is_none()
    }

    /// Returns true if `case` passes every active filter.
    pub fn matches(&self, case: &Case) -> bool {
        self.matches_search(case) && self.matches_category(case) && self.matches_status(case)
    }

    fn matches_search(&self, case: &Case) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        case.title.to_lowercase().contains(&needle)
            || case.description.to_lowercase().contains(&needle)
            || case
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, case: &Case) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| case.category == category)
    }

    fn matches_status(&self, case: &Case) -> bool {
        self.status.is_none_or(|status| case.status == status)
    }
}

/// Admin table search: case-insensitive match on title or category name.
pub fn admin_matches(case: &Case, term: &str) -> bool {
    let needle = term.to_lowercase();
    case.title.to_lowercase().contains(&needle) || case.category.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::NewCase;

    fn case(title: &str, category: &str, tags: &[&str], status: CaseStatus) -> Case {
        Case::create(NewCase {
            title: title.to_string(),
            category: category.to_string(),
            description: format!("About {}", title),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status,
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = CaseQuery::new();
        assert!(query.is_empty());
        assert!(query.matches(&case("Any", "Family Law", &[], CaseStatus::Closed)));
    }

    #[test]
    fn test_search_covers_title_description_and_tags() {
        let c = case("Patent Dispute", "Intellectual Property", &["AI"], CaseStatus::Open);
        assert!(CaseQuery::new().with_search("patent").matches(&c));
        assert!(CaseQuery::new().with_search("ABOUT").matches(&c));
        assert!(CaseQuery::new().with_search("ai").matches(&c));
        assert!(!CaseQuery::new().with_search("custody").matches(&c));
    }

    #[test]
    fn test_category_and_status_are_exact() {
        let c = case("Custody", "Family Law", &[], CaseStatus::InProgress);
        assert!(CaseQuery::new().with_category("Family Law").matches(&c));
        assert!(!CaseQuery::new().with_category("family law").matches(&c));
        assert!(CaseQuery::new().with_status(CaseStatus::InProgress).matches(&c));
        assert!(!CaseQuery::new()
            .with_category("Family Law")
            .with_status(CaseStatus::Closed)
            .matches(&c));
    }

    #[test]
    fn test_admin_matches_title_or_category() {
        let c = case("State vs. Anderson", "Criminal Law", &["trial"], CaseStatus::Open);
        assert!(admin_matches(&c, "anderson"));
        assert!(admin_matches(&c, "criminal"));
        assert!(!admin_matches(&c, "trial"));
    }
}
