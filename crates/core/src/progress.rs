//! Completion counts derived from a checklist and its current task state.
//!
//! Reports are never cached; every change recomputes the global counts and
//! all section labels together.

use serde::Serialize;

use crate::model::{Checklist, Section, SectionId, TaskState};

/// Rounded completion percentage in `0..=100`.
///
/// Halves round up. An empty checklist is 0%.
#[must_use]
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverallProgress {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub percentage: u8,
}

impl OverallProgress {
    #[must_use]
    pub fn from_counts(total: usize, completed: usize) -> Self {
        let completed = completed.min(total);
        Self {
            total,
            completed,
            remaining: total - completed,
            percentage: percentage(completed, total),
        }
    }

    /// Text for the percentage card, e.g. `"42%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub section: SectionId,
    pub total: usize,
    pub completed: usize,
}

impl SectionProgress {
    #[must_use]
    pub fn compute(section: &Section, state: &TaskState) -> Self {
        let total = section.tasks().len();
        let completed = section
            .tasks()
            .iter()
            .filter(|task| state.is_checked(task.id()))
            .count();
        Self {
            section: section.id(),
            total,
            completed,
        }
    }

    /// `"<completed>/<total>"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    /// A section with no tasks is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Global and per-section progress for one moment in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub overall: OverallProgress,
    pub sections: Vec<SectionProgress>,
}

impl ProgressReport {
    #[must_use]
    pub fn compute(checklist: &Checklist, state: &TaskState) -> Self {
        let completed = checklist
            .tasks()
            .filter(|task| state.is_checked(task.id()))
            .count();
        let overall = OverallProgress::from_counts(checklist.task_count(), completed);
        let sections = checklist
            .sections()
            .iter()
            .map(|section| SectionProgress::compute(section, state))
            .collect();
        Self { overall, sections }
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionProgress> {
        self.sections.iter().find(|progress| progress.section == id)
    }
}

/// Whether every task of `section` is checked (and it has at least one).
#[must_use]
pub fn is_section_complete(checklist: &Checklist, state: &TaskState, section: SectionId) -> bool {
    checklist
        .section(section)
        .is_some_and(|section| SectionProgress::compute(section, state).is_complete())
}
