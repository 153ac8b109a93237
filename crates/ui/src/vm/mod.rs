mod checklist_vm;
mod progress_vm;

pub use checklist_vm::{ChecklistVm, SectionVm, TaskVm, map_checklist};
pub use progress_vm::{ProgressVm, SectionProgressVm, map_progress};
