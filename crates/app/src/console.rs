use std::io::{self, BufRead, Write};

use services::Renderer;
use tracker_core::model::{Checklist, SectionId, TaskId, TaskState};
use tracker_core::progress::ProgressReport;

/// Plain-text renderer for the headless commands.
///
/// Press and celebration effects are visual only and are dropped here.
#[derive(Default)]
pub struct ConsoleRenderer {
    last_report: Option<ProgressReport>,
    pending_confirmation: Option<String>,
    notifications: Vec<String>,
}

impl ConsoleRenderer {
    #[must_use]
    pub fn last_report(&self) -> Option<&ProgressReport> {
        self.last_report.as_ref()
    }

    pub fn take_confirmation(&mut self) -> Option<String> {
        self.pending_confirmation.take()
    }

    pub fn drain_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, _state: &TaskState, report: &ProgressReport) {
        self.last_report = Some(report.clone());
    }

    fn press_task(&mut self, _task: TaskId) {}

    fn celebrate_section(&mut self, _section: SectionId) {}

    fn confirm_reset(&mut self, message: &str) {
        self.pending_confirmation = Some(message.to_owned());
    }

    fn show_notification(&mut self, message: &str) {
        self.notifications.push(message.to_owned());
    }

    fn print(&mut self) {
        tracing::warn!("printing is only available in the desktop window");
    }
}

/// Human-readable progress summary, one line per section.
#[must_use]
pub fn format_report(checklist: &Checklist, report: &ProgressReport) -> String {
    let mut out = String::new();
    out.push_str(checklist.title());
    out.push('\n');
    out.push_str(&format!(
        "Completed: {}  Remaining: {}  Progress: {}\n",
        report.overall.completed,
        report.overall.remaining,
        report.overall.percent_label()
    ));

    let width = checklist
        .sections()
        .iter()
        .map(|section| section.title().len())
        .max()
        .unwrap_or(0);
    for section in checklist.sections() {
        let Some(progress) = report.section(section.id()) else {
            continue;
        };
        let marker = if progress.is_complete() { "  done" } else { "" };
        out.push_str(&format!(
            "  {:<width$}  {}{marker}\n",
            section.title(),
            progress.label()
        ));
    }
    out
}

/// Blocking yes/no prompt on stdin. Anything but `y`/`yes` declines.
///
/// # Errors
///
/// Returns `io::Error` if stdout or stdin fail.
pub fn ask_yes_no(question: &str) -> io::Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{question} [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
