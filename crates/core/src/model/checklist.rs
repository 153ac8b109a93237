use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{SectionId, TaskId};
use crate::model::task_state::TaskState;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChecklistError {
    #[error("checklist title cannot be empty")]
    EmptyTitle,

    #[error("section {section} has an empty title")]
    EmptySectionTitle { section: usize },

    #[error("task {task} in section {section} has an empty label")]
    EmptyTaskLabel { section: usize, task: usize },

    #[error("invalid checklist definition: {0}")]
    Parse(String),
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Unvalidated checklist definition, as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDraft {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<TaskDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub label: String,
    #[serde(default)]
    pub detail: Option<String>,
    /// Checked state used when nothing has been saved for this task.
    #[serde(default)]
    pub checked: bool,
}

impl TaskDraft {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            checked: false,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl ChecklistDraft {
    /// Validate and number the draft into a `Checklist`.
    ///
    /// Tasks are numbered across sections in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError` if a title or label is blank.
    pub fn validate(self) -> Result<Checklist, ChecklistError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(ChecklistError::EmptyTitle);
        }

        for (section_idx, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(ChecklistError::EmptySectionTitle {
                    section: section_idx,
                });
            }
            for (task_idx, task) in section.tasks.iter().enumerate() {
                if task.label.trim().is_empty() {
                    return Err(ChecklistError::EmptyTaskLabel {
                        section: section_idx,
                        task: task_idx,
                    });
                }
            }
        }

        Ok(Checklist::assemble(
            title,
            normalize_optional(self.subtitle),
            self.sections,
        ))
    }
}

//
// ─── CHECKLIST ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    section: SectionId,
    label: String,
    detail: Option<String>,
    default_checked: bool,
}

impl Task {
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn default_checked(&self) -> bool {
        self.default_checked
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    title: String,
    tasks: Vec<Task>,
}

impl Section {
    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// A validated checklist: titled sections of tasks, numbered in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    title: String,
    subtitle: Option<String>,
    sections: Vec<Section>,
    task_sections: Vec<SectionId>,
}

impl Checklist {
    fn assemble(title: String, subtitle: Option<String>, drafts: Vec<SectionDraft>) -> Self {
        let mut sections = Vec::with_capacity(drafts.len());
        let mut task_sections = Vec::new();

        for (section_idx, draft) in drafts.into_iter().enumerate() {
            let section_id = SectionId::new(section_idx);
            let tasks = draft
                .tasks
                .into_iter()
                .map(|task| {
                    let id = TaskId::new(task_sections.len());
                    task_sections.push(section_id);
                    Task {
                        id,
                        section: section_id,
                        label: task.label.trim().to_owned(),
                        detail: normalize_optional(task.detail),
                        default_checked: task.checked,
                    }
                })
                .collect();
            sections.push(Section {
                id: section_id,
                title: draft.title.trim().to_owned(),
                tasks,
            });
        }

        Self {
            title,
            subtitle,
            sections,
            task_sections,
        }
    }

    /// Parse and validate a JSON checklist definition.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::Parse` for malformed JSON, or a validation error.
    pub fn from_json(raw: &str) -> Result<Self, ChecklistError> {
        let draft: ChecklistDraft =
            serde_json::from_str(raw).map_err(|err| ChecklistError::Parse(err.to_string()))?;
        draft.validate()
    }

    /// The checklist shipped with the app, used when no definition file is given.
    #[must_use]
    pub fn builtin() -> Self {
        let section = |title: &str, tasks: Vec<TaskDraft>| SectionDraft {
            title: title.to_owned(),
            tasks,
        };

        Self::assemble(
            "Transition Progress Tracker".to_owned(),
            Some("Work through each phase and keep track of what is done.".to_owned()),
            vec![
                section(
                    "Before You Leave",
                    vec![
                        TaskDraft::new("Give formal notice")
                            .with_detail("Confirm the last working day in writing."),
                        TaskDraft::new("Review your contract for notice and non-compete terms"),
                        TaskDraft::new("Collect personal files from shared drives"),
                        TaskDraft::new("Request references from colleagues"),
                    ],
                ),
                section(
                    "Handover",
                    vec![
                        TaskDraft::new("Write handover notes for open work"),
                        TaskDraft::new("Transfer ownership of documents and repositories"),
                        TaskDraft::new("Introduce successors to key contacts"),
                    ],
                ),
                section(
                    "Accounts & Admin",
                    vec![
                        TaskDraft::new("Return equipment and badges"),
                        TaskDraft::new("Check final pay, leave balance and benefits"),
                        TaskDraft::new("Move pension or retirement accounts")
                            .with_detail("Note the provider and account numbers."),
                        TaskDraft::new("Update contact details with HR"),
                    ],
                ),
                section(
                    "First Weeks",
                    vec![
                        TaskDraft::new("Complete onboarding paperwork"),
                        TaskDraft::new("Set up accounts and tooling"),
                        TaskDraft::new("Schedule introductions with your new team"),
                    ],
                ),
            ],
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.index())
    }

    /// Total number of tasks across all sections.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.task_sections.len()
    }

    /// All tasks in document order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.sections.iter().flat_map(|section| section.tasks.iter())
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        let section = self.section_of(id)?;
        self.section(section)?
            .tasks
            .iter()
            .find(|task| task.id == id)
    }

    /// The section that contains `task`, if the task exists.
    #[must_use]
    pub fn section_of(&self, task: TaskId) -> Option<SectionId> {
        self.task_sections.get(task.index()).copied()
    }

    /// Task state as declared by the definition, before any saved state is applied.
    #[must_use]
    pub fn default_state(&self) -> TaskState {
        TaskState::from_checked(self.tasks().map(Task::default_checked).collect())
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
