use std::time::Duration;

use dioxus::prelude::ReadableExt;

use storage::repository::{InMemoryStore, KeyValueStore};
use tracker_core::model::{Checklist, SectionId, TaskId};
use tracker_core::snapshot::STORAGE_KEY;
use tracker_core::tracker::{RESET_CONFIRMATION, RESET_NOTIFICATION, TrackerEvent};

use super::test_harness::setup_flow_harness;
use super::{
    NOTIFICATION_EXIT, NOTIFICATION_VISIBLE, PRESS_RESTORE, PULSE_RESTART, PulseState,
    answer_reset,
};

const TWO_SECTIONS: &str = r#"{
    "title": "Flow",
    "sections": [
        { "title": "Solo", "tasks": [ { "label": "only" } ] },
        { "title": "Pair", "tasks": [ { "label": "left" }, { "label": "right" } ] }
    ]
}"#;

fn checklist() -> Checklist {
    Checklist::from_json(TWO_SECTIONS).unwrap()
}

fn toggled(task: usize, checked: bool) -> TrackerEvent {
    TrackerEvent::Toggled {
        task: TaskId::new(task),
        checked,
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn queued_toggles_apply_the_sent_values_in_order() {
    let mut harness = setup_flow_harness(checklist(), InMemoryStore::new());

    // Sent back to back, before any re-render.
    harness.send(toggled(1, true));
    harness.send(toggled(1, false));
    harness.send(toggled(2, true));
    harness.run_for(ms(1)).await;

    let signals = harness.signals();
    assert_eq!(*signals.checked.peek(), vec![false, false, true]);
    assert_eq!(signals.progress.peek().completed, "1");
    assert_eq!(
        harness.store.get_item(STORAGE_KEY).await.unwrap().as_deref(),
        Some(r#"{"task-0":false,"task-1":false,"task-2":true}"#)
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn completing_a_section_presses_the_row_and_restarts_its_pulse() {
    let mut harness = setup_flow_harness(checklist(), InMemoryStore::new());
    harness.send(toggled(1, true));
    harness.send(toggled(0, true));
    harness.run_for(ms(1)).await;

    let signals = harness.signals();
    assert!(signals.pressed.peek().contains(&TaskId::new(0)));
    assert_eq!(
        signals.pulses.peek().get(&SectionId::new(0)).copied(),
        Some(PulseState::Cleared)
    );
    assert_eq!(signals.pulses.peek().get(&SectionId::new(1)), None);

    harness.run_for(PULSE_RESTART).await;
    assert_eq!(
        signals.pulses.peek().get(&SectionId::new(0)).copied(),
        Some(PulseState::Running)
    );
    assert!(signals.pressed.peek().contains(&TaskId::new(0)));

    harness.run_for(PRESS_RESTORE).await;
    assert!(signals.pressed.peek().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn notifications_stack_then_slide_out_and_disappear() {
    let mut harness = setup_flow_harness(checklist(), InMemoryStore::new());
    harness.send(TrackerEvent::ResetConfirmed);
    harness.run_for(ms(1)).await;
    harness.send(TrackerEvent::ResetConfirmed);
    harness.run_for(ms(1)).await;

    let notifications = harness.signals().notifications;
    {
        let shown = notifications.peek();
        assert_eq!(shown.len(), 2);
        assert_ne!(shown[0].id, shown[1].id);
        assert!(
            shown
                .iter()
                .all(|item| item.message == RESET_NOTIFICATION && !item.leaving)
        );
    }

    harness.run_for(NOTIFICATION_VISIBLE).await;
    {
        let shown = notifications.peek();
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|item| item.leaving));
    }

    harness.run_for(NOTIFICATION_EXIT).await;
    assert!(notifications.peek().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn reset_prompt_answers_decline_or_clear() {
    let store = InMemoryStore::new();
    store
        .set_item(STORAGE_KEY, r#"{"task-0":true}"#)
        .await
        .unwrap();
    let mut harness = setup_flow_harness(checklist(), store);
    harness.run_for(ms(1)).await;

    let signals = harness.signals();
    assert_eq!(*signals.checked.peek(), vec![true, false, false]);

    harness.send(TrackerEvent::ResetRequested);
    harness.run_for(ms(1)).await;
    assert_eq!(signals.confirm.peek().as_deref(), Some(RESET_CONFIRMATION));

    answer_reset(signals, harness.events(), false);
    harness.run_for(ms(1)).await;
    assert_eq!(*signals.confirm.peek(), None);
    assert_eq!(*signals.checked.peek(), vec![true, false, false]);
    assert!(signals.notifications.peek().is_empty());
    assert_eq!(
        harness.store.get_item(STORAGE_KEY).await.unwrap().as_deref(),
        Some(r#"{"task-0":true}"#)
    );

    harness.send(TrackerEvent::ResetRequested);
    harness.run_for(ms(1)).await;
    answer_reset(signals, harness.events(), true);
    harness.run_for(ms(1)).await;
    assert_eq!(*signals.confirm.peek(), None);
    assert_eq!(*signals.checked.peek(), vec![false, false, false]);
    assert_eq!(signals.progress.peek().percent, "0%");
    assert_eq!(signals.notifications.peek().len(), 1);
    assert_eq!(harness.store.get_item(STORAGE_KEY).await.unwrap(), None);
}
