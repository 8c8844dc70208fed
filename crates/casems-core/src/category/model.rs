//! Category domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A case category such as "Criminal Law".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Display name. Cases reference categories by this value.
    pub name: String,
    pub description: String,
}

/// The caller-supplied fields of a new category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A partial update of a category. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Category {
    /// Builds a category with a fresh UUID.
    pub fn create(fields: NewCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            description: fields.description,
        }
    }

    /// Merges `patch` into this category.
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
