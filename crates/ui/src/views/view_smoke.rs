use storage::repository::{InMemoryStore, KeyValueStore};
use tracker_core::model::Checklist;
use tracker_core::snapshot::STORAGE_KEY;

use super::test_harness::setup_checklist_harness;

const MOVING_DAY: &str = r#"{
    "title": "Moving Day",
    "subtitle": "Everything for the new flat",
    "sections": [
        { "title": "Packing", "tasks": [
            { "label": "Buy boxes" },
            { "label": "Label boxes", "detail": "One colour per room" },
            { "label": "Pack kitchen" }
        ] },
        { "title": "Paperwork", "tasks": [
            { "label": "Update address", "checked": true },
            { "label": "Cancel utilities" }
        ] }
    ]
}"#;

fn checklist() -> Checklist {
    Checklist::from_json(MOVING_DAY).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_renders_sections_and_controls() {
    let mut harness = setup_checklist_harness(checklist(), InMemoryStore::new());
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Moving Day",
        "Everything for the new flat",
        "Packing",
        "Paperwork",
        "Label boxes",
        "One colour per room",
        "task-checkbox",
        "checklist-section",
        "section-header",
        "completedCount",
        "remainingCount",
        "progressPercent",
        "resetBtn",
        "printBtn",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_uses_markup_defaults_before_load() {
    let mut harness = setup_checklist_harness(checklist(), InMemoryStore::new());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0/3"), "missing packing label in {html}");
    assert!(html.contains("1/2"), "missing paperwork label in {html}");
    assert!(html.contains("20%"), "missing percentage in {html}");
    assert!(!html.contains("section-progress complete"), "unexpected marker in {html}");
    assert!(!html.contains("tracker-modal"), "modal should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_applies_saved_state() {
    let store = InMemoryStore::new();
    store
        .set_item(
            STORAGE_KEY,
            r#"{"task-0":true,"task-1":true,"task-2":true,"task-3":false}"#,
        )
        .await
        .unwrap();

    let mut harness = setup_checklist_harness(checklist(), store);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("3/3"), "missing packing label in {html}");
    assert!(html.contains("0/2"), "missing paperwork label in {html}");
    assert!(html.contains("60%"), "missing percentage in {html}");
    assert!(
        html.contains("section-progress complete"),
        "missing completion marker in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_survives_corrupt_saved_state() {
    let store = InMemoryStore::new();
    store.set_item(STORAGE_KEY, "not json").await.unwrap();

    let mut harness = setup_checklist_harness(checklist(), store);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("1/2"), "missing default label in {html}");
    assert!(html.contains("20%"), "missing percentage in {html}");
    assert_eq!(
        harness.store.get_item(STORAGE_KEY).await.unwrap().as_deref(),
        Some("not json")
    );
}
