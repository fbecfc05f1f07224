// catalog-client/tests/category_view.rs
// Category view against the in-memory catalog API

mod common;

use catalog_client::{CategoryView, CommandOutcome, CommandPhase, StoreEvent};
use common::{TestServer, category};

async fn loaded_view(server: &TestServer) -> CategoryView<catalog_client::OneshotHttpClient> {
    let mut view = CategoryView::new(server.client.clone());
    view.init().await;
    view
}

#[tokio::test]
async fn test_init_loads_categories() {
    let server = TestServer::seeded();
    let view = loaded_view(&server).await;

    let names: Vec<&str> = view
        .categories()
        .iter()
        .map(|c| c.category_name.as_str())
        .collect();
    assert_eq!(names, vec!["Sweets", "Dairy"]);
    assert!(!view.status().is_loading());
    assert!(view.status().error_message().is_none());
}

#[tokio::test]
async fn test_add_category_refreshes_and_resets_draft() {
    let server = TestServer::empty();
    let mut view = loaded_view(&server).await;
    assert!(view.categories().is_empty());
    server.clear_requests();

    view.edit_draft(|d| {
        d.category_name = "Beverages".into();
        d.description = "Drinks".into();
    });
    let outcome = view.add_category().await;

    assert_eq!(outcome, CommandOutcome::Completed);
    assert_eq!(
        server.requests(),
        vec!["POST /api/Category", "GET /api/Category"]
    );
    assert_eq!(view.categories().len(), 1);
    let created = &view.categories()[0];
    assert_eq!(created.category_name, "Beverages");
    assert_eq!(created.description, "Drinks");
    assert_eq!(created.id, 101);

    assert!(view.draft().category_name.is_empty());
    assert!(view.draft().description.is_empty());
    assert_eq!(view.status().notice(), Some("Category added"));
    assert_eq!(view.status().phase(), CommandPhase::Idle);
    assert!(!view.status().is_loading());
}

#[tokio::test]
async fn test_add_category_with_blank_name_is_rejected_locally() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.clear_requests();

    view.edit_draft(|d| d.category_name = "   ".into());
    let outcome = view.add_category().await;

    assert!(matches!(outcome, CommandOutcome::Rejected(_)));
    assert!(server.requests().is_empty());
    assert_eq!(view.categories().len(), 2);
    assert!(view.status().error_message().is_some());
    assert_eq!(view.status().phase(), CommandPhase::Failed);
    // Draft kept for correction
    assert_eq!(view.draft().category_name, "   ");
}

#[tokio::test]
async fn test_selection_edits_do_not_touch_list() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;

    assert!(view.begin_edit(3));
    view.edit_selection(|c| c.category_name = "Candy Shop".into());

    assert_eq!(view.selected().unwrap().category_name, "Candy Shop");
    assert_eq!(view.categories()[0].category_name, "Sweets");
}

#[tokio::test]
async fn test_begin_edit_unknown_id() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;

    assert!(!view.begin_edit(999));
    assert!(view.selected().is_none());
}

#[tokio::test]
async fn test_update_category_success() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;

    assert!(view.begin_edit(4));
    view.edit_selection(|c| c.description = "Milk, cheese, yoghurt".into());
    let outcome = view.update_category().await;

    assert_eq!(outcome, CommandOutcome::Completed);
    assert!(view.selected().is_none());
    let dairy = view.categories().iter().find(|c| c.id == 4).unwrap();
    assert_eq!(dairy.description, "Milk, cheese, yoghurt");
    assert_eq!(view.status().notice(), Some("Category updated"));
}

#[tokio::test]
async fn test_failed_update_keeps_selection_and_list() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.fail("PUT /api/Category");

    assert!(view.begin_edit(3));
    view.edit_selection(|c| c.category_name = "Confectionery".into());
    let outcome = view.update_category().await;

    assert_eq!(
        outcome,
        CommandOutcome::Failed("Failed to update category".into())
    );
    assert_eq!(view.selected().unwrap().category_name, "Confectionery");
    assert_eq!(view.categories()[0].category_name, "Sweets");
    assert_eq!(
        view.status().error_message(),
        Some("Failed to update category")
    );
    assert!(!view.status().is_loading());

    // Retry once the server recovers
    server.recover("PUT /api/Category");
    assert_eq!(view.update_category().await, CommandOutcome::Completed);
    assert_eq!(view.categories()[0].category_name, "Confectionery");
    assert!(view.status().error_message().is_none());
}

#[tokio::test]
async fn test_update_without_selection_is_cancelled() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.clear_requests();

    assert_eq!(view.update_category().await, CommandOutcome::Cancelled);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_cancel_edit_sends_nothing() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.clear_requests();

    view.begin_edit(3);
    view.cancel_edit();

    assert!(view.selected().is_none());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_delete_without_confirmation_sends_nothing() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.clear_requests();

    let outcome = view.delete_category(3, false).await;

    assert_eq!(outcome, CommandOutcome::Cancelled);
    assert_eq!(server.write_count(), 0);
    assert_eq!(view.categories().len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_soft_deletes() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    view.begin_edit(3);

    let outcome = view.delete_category(3, true).await;

    assert_eq!(outcome, CommandOutcome::Completed);
    assert!(view.categories().iter().all(|c| c.id != 3));
    assert!(view.selected().is_none());
    // Soft delete: the row still exists server side
    server.with_state(|s| {
        assert!(s.tombstones.contains(&3));
        assert!(s.categories.iter().any(|c| c.id == 3));
    });
}

#[tokio::test]
async fn test_failed_load_keeps_previous_snapshot() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.fail("GET /api/Category");
    server.with_state(|s| s.categories.push(category(9, "Frozen", "")));

    assert!(!view.load_categories().await);

    assert_eq!(view.categories().len(), 2);
    assert_eq!(
        view.status().error_message(),
        Some("Failed to load categories")
    );
    assert!(!view.status().is_loading());
}

#[tokio::test]
async fn test_refresh_failure_after_confirmed_write_still_completes() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.fail("GET /api/Category");

    view.edit_draft(|d| d.category_name = "Bakery".into());
    let outcome = view.add_category().await;

    assert_eq!(outcome, CommandOutcome::Completed);
    assert_eq!(view.categories().len(), 2);
    assert_eq!(
        view.status().error_message(),
        Some("Failed to load categories")
    );
    server.with_state(|s| assert!(s.categories.iter().any(|c| c.category_name == "Bakery")));
}

#[tokio::test]
async fn test_events_follow_command_lifecycle() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    let mut rx = view.subscribe();

    view.edit_draft(|d| d.category_name = "Snacks".into());
    let _ = view.add_category().await;

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.first(), Some(&StoreEvent::DraftChanged));
    assert!(events.contains(&StoreEvent::LoadingChanged(true)));
    assert!(events.contains(&StoreEvent::PhaseChanged(CommandPhase::Submitting)));
    assert!(events.contains(&StoreEvent::CategoriesReplaced));
    assert_eq!(events.last(), Some(&StoreEvent::LoadingChanged(false)));
}

#[tokio::test]
async fn test_failed_add_keeps_draft_and_list() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.fail("POST /api/Category");

    view.edit_draft(|d| {
        d.category_name = "Beverages".into();
        d.description = "Drinks".into();
    });
    let outcome = view.add_category().await;

    assert_eq!(
        outcome,
        CommandOutcome::Failed("Failed to add category".into())
    );
    assert_eq!(view.draft().category_name, "Beverages");
    assert_eq!(view.draft().description, "Drinks");
    assert_eq!(view.categories().len(), 2);
    assert_eq!(view.status().phase(), CommandPhase::Failed);
    assert!(!view.status().is_loading());
}

#[tokio::test]
async fn test_failed_delete_keeps_list_and_selection() {
    let server = TestServer::seeded();
    let mut view = loaded_view(&server).await;
    server.fail("DELETE /api/Category/softDelete");
    assert!(view.begin_edit(3));

    let outcome = view.delete_category(3, true).await;

    assert_eq!(
        outcome,
        CommandOutcome::Failed("Failed to delete category".into())
    );
    assert!(view.categories().iter().any(|c| c.id == 3));
    assert_eq!(view.selected().map(|c| c.id), Some(3));
    assert_eq!(
        view.status().error_message(),
        Some("Failed to delete category")
    );
    assert!(!view.status().is_loading());
    server.with_state(|s| assert!(s.tombstones.is_empty()));
}
