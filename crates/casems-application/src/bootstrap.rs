//! Wires the stores together from configuration.

use crate::entity_store::EntityStore;
use crate::session_store::SessionStore;
use casems_core::auth::{AuthState, SessionCache};
use casems_core::config::AppConfig;
use casems_core::error::Result;
use casems_core::notification::Notifier;
use casems_infrastructure::{
    MemoryCaseRepository, MemoryCategoryRepository, MemoryCommentRepository, SeedData,
};
use std::sync::Arc;

/// Everything a front end needs to serve the showcase.
pub struct AppContext {
    pub config: AppConfig,
    pub entities: Arc<EntityStore>,
    pub session: Arc<SessionStore>,
}

/// Builds both stores and restores any remembered session.
///
/// The entity store starts with the bundled demo data unless
/// `store.seed_demo_data` is off, in which case it starts empty.
pub async fn bootstrap(
    config: AppConfig,
    cache: Arc<dyn SessionCache>,
    notifier: Arc<dyn Notifier>,
) -> Result<AppContext> {
    let seed = if config.store.seed_demo_data {
        SeedData::demo()?
    } else {
        SeedData::default()
    };
    tracing::info!(
        "[Bootstrap] Seeding entity store with {} cases, {} categories",
        seed.cases.len(),
        seed.categories.len()
    );
    let entities = Arc::new(entity_store_from(seed, notifier.clone()));

    let session = Arc::new(SessionStore::new(config.auth.clone(), cache, notifier));
    match session.restore().await {
        AuthState::Authenticated(user) => {
            tracing::info!("[Bootstrap] Resumed session for {}", user.email)
        }
        AuthState::Anonymous => tracing::debug!("[Bootstrap] No remembered session"),
    }

    Ok(AppContext {
        config,
        entities,
        session,
    })
}

/// An entity store holding the bundled demo data.
pub fn demo_entity_store(notifier: Arc<dyn Notifier>) -> Result<EntityStore> {
    Ok(entity_store_from(SeedData::demo()?, notifier))
}

fn entity_store_from(seed: SeedData, notifier: Arc<dyn Notifier>) -> EntityStore {
    EntityStore::new(
        Arc::new(MemoryCaseRepository::with_cases(seed.cases)),
        Arc::new(MemoryCategoryRepository::with_categories(seed.categories)),
        Arc::new(MemoryCommentRepository::with_comments(seed.comments)),
        notifier,
    )
}
