use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, TrackerService};
use storage::repository::{InMemoryStore, Storage};
use tracker_core::model::Checklist;
use tracker_core::tracker::TrackerEvent;

use crate::context::{UiApp, build_app_context};
use crate::views::{ChecklistView, TrackerSignals, use_tracker_events, use_tracker_signals};

struct TestApp {
    tracker: Arc<TrackerService>,
}

impl UiApp for TestApp {
    fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ChecklistHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { ChecklistView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: InMemoryStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_app(checklist: Checklist, store: &InMemoryStore) -> Arc<TestApp> {
    let storage = Storage {
        local: Arc::new(store.clone()),
    };
    let services = AppServices::from_storage(&storage, checklist);
    Arc::new(TestApp {
        tracker: services.tracker(),
    })
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    events: Rc<RefCell<Option<Coroutine<TrackerEvent>>>>,
    signals: Rc<RefCell<Option<TrackerSignals>>>,
}

impl HarnessHandles {
    pub fn events(&self) -> Coroutine<TrackerEvent> {
        self.events.borrow().clone().expect("events registered")
    }

    pub fn signals(&self) -> TrackerSignals {
        self.signals.borrow().clone().expect("signals registered")
    }
}

#[derive(Props, Clone)]
struct FlowHarnessProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for FlowHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for FlowHarnessProps {}

#[component]
fn TrackerFlowHarness(props: FlowHarnessProps) -> Element {
    let tracker = props.app.tracker();
    let signals = use_tracker_signals(tracker.checklist());
    let events = use_tracker_events(tracker, signals);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.events.borrow_mut() = Some(events);
        *props.handles.signals.borrow_mut() = Some(signals);
    }
    rsx! { div {} }
}

/// Drives the tracker's coroutine and timers without the page markup.
pub struct FlowHarness {
    pub dom: VirtualDom,
    pub store: InMemoryStore,
    handles: HarnessHandles,
}

impl FlowHarness {
    pub fn send(&self, event: TrackerEvent) {
        self.handles.events().send(event);
    }

    pub fn events(&self) -> Coroutine<TrackerEvent> {
        self.handles.events()
    }

    pub fn signals(&self) -> TrackerSignals {
        self.handles.signals()
    }

    /// Process work and timers for `duration` of tokio time. Meant for tests
    /// started with a paused clock, where sleeping auto-advances.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::timeout_at(deadline, self.dom.wait_for_work())
            .await
            .is_ok()
        {
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
        drive_dom(&mut self.dom);
    }
}

pub fn setup_flow_harness(checklist: Checklist, store: InMemoryStore) -> FlowHarness {
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        TrackerFlowHarness,
        FlowHarnessProps {
            app: test_app(checklist, &store),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    FlowHarness {
        dom,
        store,
        handles,
    }
}

pub fn setup_checklist_harness(checklist: Checklist, store: InMemoryStore) -> ViewHarness {
    let app = test_app(checklist, &store);
    let dom = VirtualDom::new_with_props(ChecklistHarness, ViewHarnessProps { app });

    ViewHarness { dom, store }
}
