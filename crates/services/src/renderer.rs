use tracker_core::model::{SectionId, TaskId, TaskState};
use tracker_core::progress::ProgressReport;

/// Presentation side of the tracker.
///
/// The controller calls these in the order the effects were produced.
/// Implementations that do not show a given element (no reset button, no
/// percentage card, ...) simply ignore the call.
pub trait Renderer {
    /// Show current checkbox states and the counts derived from them.
    fn render(&mut self, state: &TaskState, report: &ProgressReport);

    /// Brief press feedback on a task row. Purely cosmetic.
    fn press_task(&mut self, task: TaskId);

    /// Restart the completion pulse on a section header.
    fn celebrate_section(&mut self, section: SectionId);

    /// Ask the user to confirm a reset. The answer is dispatched back as
    /// `ResetConfirmed` or `ResetDeclined`.
    fn confirm_reset(&mut self, message: &str);

    fn show_notification(&mut self, message: &str);

    fn print(&mut self);
}
