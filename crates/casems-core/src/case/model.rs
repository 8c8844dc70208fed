//! Case domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::timestamp;

/// Progress of a legal case.
///
/// The wire and display form is kebab-case (`open`, `in-progress`, `closed`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaseStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

/// A published legal case.
///
/// `category` holds the category *name*. It is not checked against the
/// category collection and is left untouched when that category is renamed
/// or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Unique identifier.
    pub id: String,
    pub title: String,
    /// Name of the category this case is filed under.
    pub category: String,
    /// Short summary shown on listing cards.
    pub description: String,
    /// Rich-text (HTML) body.
    pub content: String,
    /// Tags in display order.
    pub tags: Vec<String>,
    /// Hero image reference.
    pub primary_image: String,
    /// Additional image references.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: CaseStatus,
}

/// The caller-supplied fields of a new case.
///
/// Identifier and timestamps are assigned by [`Case::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    pub title: String,
    pub category: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub primary_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: CaseStatus,
}

/// A partial update of a case. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub primary_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: Option<CaseStatus>,
}

impl Case {
    /// Builds a case with a fresh UUID and both timestamps set to now.
    pub fn create(fields: NewCase) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            category: fields.category,
            description: fields.description,
            content: fields.content,
            tags: fields.tags,
            primary_image: fields.primary_image,
            images: fields.images,
            created_at: now,
            updated_at: now,
            status: fields.status,
        }
    }

    /// Merges `patch` into this case and refreshes `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: CasePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(primary_image) = patch.primary_image {
            self.primary_image = primary_image;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = timestamp::after(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn sample() -> NewCase {
        NewCase {
            title: "Johnson v. Tech Corp".to_string(),
            category: "Civil Rights".to_string(),
            description: "Data privacy".to_string(),
            tags: vec!["privacy".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(CaseStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            CaseStatus::from_str("closed").unwrap(),
            CaseStatus::Closed
        );
        assert!(CaseStatus::from_str("archived").is_err());
        assert_eq!(
            serde_json::to_string(&CaseStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(CaseStatus::iter().count(), 3);
    }

    #[test]
    fn test_create_assigns_id_and_equal_timestamps() {
        let case = Case::create(sample());
        assert!(!case.id.is_empty());
        assert_eq!(case.created_at, case.updated_at);
        assert_eq!(case.status, CaseStatus::Open);

        let other = Case::create(sample());
        assert_ne!(case.id, other.id);
    }

    #[test]
    fn test_apply_patch_keeps_created_at() {
        let mut case = Case::create(sample());
        let created_at = case.created_at;
        let previous_update = case.updated_at;

        case.apply(CasePatch {
            title: Some("Renamed".to_string()),
            status: Some(CaseStatus::Closed),
            ..Default::default()
        });

        assert_eq!(case.title, "Renamed");
        assert_eq!(case.status, CaseStatus::Closed);
        assert_eq!(case.category, "Civil Rights");
        assert_eq!(case.created_at, created_at);
        assert!(case.updated_at > previous_update);
    }

    #[test]
    fn test_case_json_uses_camel_case() {
        let case = Case::create(sample());
        let json = serde_json::to_value(&case).unwrap();
        assert!(json.get("primaryImage").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "open");
    }
}
