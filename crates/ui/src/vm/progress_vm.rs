use tracker_core::model::SectionId;
use tracker_core::progress::{ProgressReport, SectionProgress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionProgressVm {
    pub id: SectionId,
    pub label: String,
    pub complete: bool,
}

/// Display strings for the summary cards and section badges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: String,
    pub remaining: String,
    pub percent: String,
    pub percentage: u8,
    pub sections: Vec<SectionProgressVm>,
}

impl ProgressVm {
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionProgressVm> {
        self.sections.iter().find(|section| section.id == id)
    }
}

impl From<&SectionProgress> for SectionProgressVm {
    fn from(progress: &SectionProgress) -> Self {
        Self {
            id: progress.section,
            label: progress.label(),
            complete: progress.is_complete(),
        }
    }
}

#[must_use]
pub fn map_progress(report: &ProgressReport) -> ProgressVm {
    ProgressVm {
        completed: report.overall.completed.to_string(),
        remaining: report.overall.remaining.to_string(),
        percent: report.overall.percent_label(),
        percentage: report.overall.percentage,
        sections: report.sections.iter().map(SectionProgressVm::from).collect(),
    }
}
