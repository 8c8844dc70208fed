//! Case repository trait.
//!
//! Defines the interface for case persistence operations.

use super::model::Case;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing case persistence.
///
/// Collections are kept in display order: the most recently inserted case
/// comes first.
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Lists all cases, newest first.
    async fn list_all(&self) -> Result<Vec<Case>>;

    /// Finds a case by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Case))`: Case found
    /// - `Ok(None)`: Case not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, case_id: &str) -> Result<Option<Case>>;

    /// Lists the cases filed under the given category name.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Case>>;

    /// Inserts a new case at the front of the collection.
    async fn insert(&self, case: Case) -> Result<()>;

    /// Replaces the stored case with the same ID.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Case replaced
    /// - `Ok(false)`: No case with that ID; nothing changed
    async fn replace(&self, case: Case) -> Result<bool>;

    /// Deletes a case.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Case removed
    /// - `Ok(false)`: No case with that ID; nothing changed
    async fn delete(&self, case_id: &str) -> Result<bool>;
}
