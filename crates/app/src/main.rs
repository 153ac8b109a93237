use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, TrackerController, TrackerService};
use tracing_subscriber::EnvFilter;
use tracker_core::model::Checklist;
use tracker_core::tracker::TrackerEvent;
use ui::{App, UiApp, build_app_context};

mod console;

use console::{ConsoleRenderer, ask_yes_no, format_report};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidChecklist { path: PathBuf, reason: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidChecklist { path, reason } => {
                write!(f, "cannot use checklist {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    tracker: Arc<TrackerService>,
}

impl UiApp for DesktopApp {
    fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}

struct Args {
    db_url: String,
    checklist: Option<PathBuf>,
    json: bool,
    yes: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--checklist <path>]");
    eprintln!("  cargo run -p app -- status [--db <sqlite_url>] [--checklist <path>] [--json]");
    eprintln!("  cargo run -p app -- reset  [--db <sqlite_url>] [--checklist <path>] [--yes]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:tracker.sqlite3");
    eprintln!("  --checklist <built-in transition checklist>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRACKER_DB_URL, TRACKER_CHECKLIST, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(command: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRACKER_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| "sqlite:tracker.sqlite3".into(), |value| value);
        let mut checklist = std::env::var("TRACKER_CHECKLIST")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut json = false;
        let mut yes = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--checklist" => {
                    checklist = Some(PathBuf::from(require_value(args, "--checklist")?));
                }
                "--json" if command == Command::Status => json = true,
                "--yes" | "-y" if command == Command::Reset => yes = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url: normalize_sqlite_url(db_url),
            checklist,
            json,
            yes,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn load_checklist(path: Option<&Path>) -> Result<Checklist, ArgsError> {
    let Some(path) = path else {
        return Ok(Checklist::builtin());
    };

    let raw = std::fs::read_to_string(path).map_err(|err| ArgsError::InvalidChecklist {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Checklist::from_json(&raw).map_err(|err| ArgsError::InvalidChecklist {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand, or only flags: open the window.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let checklist = load_checklist(parsed.checklist.as_deref())?;
    tracing::info!(
        checklist = checklist.title(),
        tasks = checklist.task_count(),
        db = %parsed.db_url,
        "starting tracker"
    );

    // Every command reads or writes the same saved state, so storage is ready first.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, checklist).await?;

    match cmd {
        Command::Ui => {
            let tracker = services.tracker();
            let title = tracker.checklist().title().to_owned();
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { tracker });
            let context = build_app_context(&app);

            // The tracker is an ordinary window; it must not float over other apps.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            let tracker = services.tracker();
            let mut controller =
                TrackerController::new(TrackerService::clone(&tracker), ConsoleRenderer::default());
            controller.initialize().await;

            let report = controller
                .renderer()
                .last_report()
                .cloned()
                .unwrap_or_else(|| controller.report());
            if parsed.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_report(controller.checklist(), &report));
            }
            Ok(())
        }
        Command::Reset => {
            let tracker = services.tracker();
            let mut controller =
                TrackerController::new(TrackerService::clone(&tracker), ConsoleRenderer::default());
            controller.initialize().await;
            controller.dispatch(TrackerEvent::ResetRequested).await;

            let Some(question) = controller.renderer_mut().take_confirmation() else {
                return Ok(());
            };
            let confirmed = parsed.yes || ask_yes_no(&question)?;
            let answer = if confirmed {
                TrackerEvent::ResetConfirmed
            } else {
                TrackerEvent::ResetDeclined
            };
            controller.dispatch(answer).await;

            for message in controller.renderer_mut().drain_notifications() {
                println!("{message}");
            }
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::vec::IntoIter<String> {
        list.iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn memory_and_absolute_urls_are_left_alone() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/t.sqlite3".into()),
            "sqlite:///tmp/t.sqlite3"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/t.sqlite3".into()),
            "sqlite:///tmp/t.sqlite3"
        );
    }

    #[test]
    fn flags_are_scoped_to_their_command() {
        let parsed = Args::parse(Command::Status, &mut args(&["--db", "sqlite::memory:", "--json"]))
            .unwrap();
        assert!(parsed.json);
        assert_eq!(parsed.db_url, "sqlite::memory:");

        assert!(matches!(
            Args::parse(Command::Ui, &mut args(&["--json"])),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(Args::parse(Command::Reset, &mut args(&["--yes"])).unwrap().yes);
    }

    #[test]
    fn missing_flag_value_is_reported() {
        assert!(matches!(
            Args::parse(Command::Ui, &mut args(&["--checklist"])),
            Err(ArgsError::MissingValue { flag: "--checklist" })
        ));
    }

    #[test]
    fn missing_checklist_file_is_an_error() {
        let err = load_checklist(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidChecklist { .. }));
        assert!(load_checklist(None).is_ok());
    }
}
