use tracker_core::model::{Checklist, TaskState};
use tracker_core::progress::ProgressReport;
use tracker_core::tracker::{Effect, Transition, TrackerEvent, handle_event};

use crate::renderer::Renderer;
use crate::tracker_service::TrackerService;

/// Owns the live task state and runs every transition's effects.
///
/// Events are applied one at a time; each `dispatch` finishes all of its
/// effects (including persistence) before returning.
pub struct TrackerController<R> {
    service: TrackerService,
    state: TaskState,
    renderer: R,
}

impl<R: Renderer> TrackerController<R> {
    #[must_use]
    pub fn new(service: TrackerService, renderer: R) -> Self {
        let state = service.checklist().default_state();
        Self {
            service,
            state,
            renderer,
        }
    }

    /// Restore saved state and draw the initial progress.
    pub async fn initialize(&mut self) {
        self.state = self.service.load_state().await;
        let report = self.report();
        self.renderer.render(&self.state, &report);
    }

    pub async fn dispatch(&mut self, event: TrackerEvent) {
        let Transition { state, effects } =
            handle_event(self.service.checklist(), &self.state, event);
        self.state = state;
        tracing::debug!(?event, effects = effects.len(), "dispatched tracker event");

        for effect in effects {
            self.run(effect).await;
        }
    }

    async fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Press(task) => self.renderer.press_task(task),
            Effect::Render(report) => self.renderer.render(&self.state, &report),
            Effect::Persist(snapshot) => self.service.save_snapshot(&snapshot).await,
            Effect::ClearPersisted => self.service.clear_state().await,
            Effect::Celebrate(section) => self.renderer.celebrate_section(section),
            Effect::ConfirmReset(message) => self.renderer.confirm_reset(message),
            Effect::Notify(message) => self.renderer.show_notification(&message),
            Effect::Print => self.renderer.print(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &TaskState {
        &self.state
    }

    #[must_use]
    pub fn checklist(&self) -> &Checklist {
        self.service.checklist()
    }

    #[must_use]
    pub fn report(&self) -> ProgressReport {
        ProgressReport::compute(self.service.checklist(), &self.state)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
