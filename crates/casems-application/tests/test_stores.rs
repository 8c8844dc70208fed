use casems_application::bootstrap;
use casems_core::case::{CasePatch, CaseStatus, NewCase};
use casems_core::category::NewCategory;
use casems_core::comment::NewComment;
use casems_core::config::{AppConfig, AuthSettings, StoreSettings};
use casems_infrastructure::{FileSessionCache, MemorySessionCache, RecordingNotifier};
use std::sync::Arc;
use tempfile::TempDir;

fn config(seed_demo_data: bool) -> AppConfig {
    AppConfig {
        auth: AuthSettings::instant(),
        store: StoreSettings { seed_demo_data },
    }
}

#[tokio::test]
async fn test_deleting_category_keeps_its_cases() {
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = bootstrap(
        config(false),
        Arc::new(MemorySessionCache::new()),
        notifier.clone(),
    )
    .await
    .unwrap();
    let store = &ctx.entities;

    let category = store
        .create_category(NewCategory {
            name: "Tax Law".to_string(),
            description: "Tax disputes".to_string(),
        })
        .await
        .unwrap();
    let case = store
        .create_case(NewCase {
            title: "Revenue vs. Hale".to_string(),
            category: "Tax Law".to_string(),
            description: "Unpaid duties".to_string(),
            content: "Details".to_string(),
            ..NewCase::default()
        })
        .await
        .unwrap();

    let in_category = store.list_cases_by_category("Tax Law").await.unwrap();
    assert_eq!(in_category, vec![case.clone()]);

    assert!(store.delete_category(&category.id).await.unwrap());
    assert!(store.list_categories().await.unwrap().is_empty());

    let orphan = store.get_case(&case.id).await.unwrap().unwrap();
    assert_eq!(orphan.category, "Tax Law");

    let titles: Vec<String> = notifier.drain().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec!["Category created", "Case created", "Category deleted"]
    );
}

#[tokio::test]
async fn test_case_lifecycle_on_demo_data() {
    let ctx = bootstrap(
        config(true),
        Arc::new(MemorySessionCache::new()),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();
    let store = &ctx.entities;

    let created = store
        .create_case(NewCase {
            title: "New matter".to_string(),
            category: "Family Law".to_string(),
            ..NewCase::default()
        })
        .await
        .unwrap();
    assert_eq!(store.list_cases().await.unwrap()[0].id, created.id);

    let updated = store
        .update_case(
            &created.id,
            CasePatch {
                status: Some(CaseStatus::Closed),
                ..CasePatch::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, CaseStatus::Closed);
    assert_eq!(updated.title, "New matter");
    assert!(updated.updated_at > created.updated_at);

    let reply = store
        .add_comment(
            NewComment::new(&created.id, "Ann", "ann@example.com", "First").in_reply_to("c1"),
        )
        .await
        .unwrap();
    assert!(reply.is_some());

    assert!(store.delete_case(&created.id).await.unwrap());
    assert_eq!(store.list_cases().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_session_survives_restart_with_file_cache() {
    let temp_dir = TempDir::new().unwrap();
    let cache_path = temp_dir.path().join("session_cache.json");

    let first = bootstrap(
        config(false),
        Arc::new(FileSessionCache::with_path(cache_path.clone())),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();
    assert!(first.session.login("admin@casems.com", "admin123").await);

    let second = bootstrap(
        config(false),
        Arc::new(FileSessionCache::with_path(cache_path.clone())),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();
    let user = second.session.current_user().await.unwrap();
    assert_eq!(user.email, "admin@casems.com");

    second.session.logout().await;

    let third = bootstrap(
        config(false),
        Arc::new(FileSessionCache::with_path(cache_path)),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();
    assert!(!third.session.is_authenticated().await);
}
