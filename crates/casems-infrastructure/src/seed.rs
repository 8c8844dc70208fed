//! Bundled demo data.
//!
//! The showcase starts with five categories, six cases and a few comment
//! threads. The data is embedded at build time from `data/demo_data.json`.

use casems_core::case::Case;
use casems_core::category::Category;
use casems_core::comment::Comment;
use casems_core::error::Result;
use serde::Deserialize;

const DEMO_DATA: &str = include_str!("../data/demo_data.json");

/// Initial contents of the entity store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    pub categories: Vec<Category>,
    /// Cases in display order.
    pub cases: Vec<Case>,
    /// Top-level comments with nested replies.
    pub comments: Vec<Comment>,
}

impl SeedData {
    /// Parses the bundled demo data.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_DATA)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(content)?;
        tracing::debug!(
            "[Seed] Parsed {} categories, {} cases, {} comment threads",
            seed.categories.len(),
            seed.cases.len(),
            seed.comments.len()
        );
        Ok(seed)
    }
}
