use tracker_core::model::{Checklist, Section, SectionId, Task, TaskId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskVm {
    pub id: TaskId,
    pub label: String,
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub id: SectionId,
    pub title: String,
    pub tasks: Vec<TaskVm>,
}

/// Static layout of the page; does not change for the lifetime of the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistVm {
    pub title: String,
    pub subtitle: Option<String>,
    pub sections: Vec<SectionVm>,
}

impl From<&Task> for TaskVm {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            label: task.label().to_owned(),
            detail: task.detail().map(str::to_owned),
        }
    }
}

impl From<&Section> for SectionVm {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id(),
            title: section.title().to_owned(),
            tasks: section.tasks().iter().map(TaskVm::from).collect(),
        }
    }
}

#[must_use]
pub fn map_checklist(checklist: &Checklist) -> ChecklistVm {
    ChecklistVm {
        title: checklist.title().to_owned(),
        subtitle: checklist.subtitle().map(str::to_owned),
        sections: checklist.sections().iter().map(SectionVm::from).collect(),
    }
}
