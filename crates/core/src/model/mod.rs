mod checklist;
mod ids;
mod task_state;

pub use checklist::{
    Checklist, ChecklistDraft, ChecklistError, Section, SectionDraft, Task, TaskDraft,
};
pub use ids::{ParseIdError, SectionId, TaskId};
pub use task_state::TaskState;
