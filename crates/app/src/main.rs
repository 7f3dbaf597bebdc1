use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Catalog;
use quiz_core::model::{QuestionKind, SessionSettings};
use services::{Clock, PracticeService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info,services=debug";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimerSecs { raw: String },
    InvalidCategory { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimerSecs { raw } => {
                write!(f, "invalid --timer-secs value: {raw}")
            }
            ArgsError::InvalidCategory { raw } => write!(f, "invalid --category value: {raw}"),
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
    practice: Arc<PracticeService>,
}

impl UiApp for DesktopApp {
    fn practice_service(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }
}

struct Args {
    timer_secs: u32,
    category: QuestionKind,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--timer-secs <n>] [--category <slug>]");
    eprintln!("  cargo run -p app -- check");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --timer-secs {}", SessionSettings::DEFAULT_TIMER_SECS);
    eprintln!("  --category true-false");
    eprintln!();
    eprintln!("Categories:");
    eprintln!("  true-false, multiple-choice, matching, fill-blanks");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TIMER_SECS, QUIZ_CATEGORY, QUIZ_LOG (falls back to RUST_LOG)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

fn parse_timer_secs(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ArgsError::InvalidTimerSecs { raw }),
    }
}

fn parse_category(raw: String) -> Result<QuestionKind, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidCategory { raw })
}

impl Args {
    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut timer_secs = match std::env::var("QUIZ_TIMER_SECS") {
            Ok(value) => parse_timer_secs(value)?,
            Err(_) => SessionSettings::DEFAULT_TIMER_SECS,
        };
        let mut category = match std::env::var("QUIZ_CATEGORY") {
            Ok(value) => parse_category(value)?,
            Err(_) => QuestionKind::TrueFalse,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--timer-secs" => {
                    timer_secs = parse_timer_secs(require_value(args, "--timer-secs")?)?;
                }
                "--category" => {
                    category = parse_category(require_value(args, "--category")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            timer_secs,
            category,
        })
    }

    fn settings(&self) -> Result<SessionSettings, Box<dyn std::error::Error>> {
        let settings = SessionSettings::new(
            self.timer_secs,
            SessionSettings::DEFAULT_SCROLL_DELAY_MS,
            SessionSettings::DEFAULT_HIGHLIGHT_MS,
            self.category,
        )?;
        Ok(settings)
    }
}

fn init_tracing() {
    let filter = std::env::var("QUIZ_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

fn check_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::glaciers()?;
    let passage = catalog.passage();
    println!(
        "catalog ok: {} questions, {} anchors in \"{}\"",
        catalog.len(),
        passage.anchors().count(),
        passage.title()
    );
    for category in catalog.categories() {
        println!(
            "  {:<16} {:>2}  {}",
            category.kind(),
            catalog.questions_by_kind(category.kind()).count(),
            category.title()
        );
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
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

    init_tracing();

    match cmd {
        Command::Check => {
            if let Some(extra) = argv.into_iter().next() {
                let err = ArgsError::UnknownArg(extra);
                eprintln!("{err}");
                print_usage();
                return Err(err.into());
            }
            check_catalog()
        }
        Command::Ui => {
            let mut iter = argv.into_iter();
            let parsed = Args::parse_ui(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;
            let settings = parsed.settings()?;
            let practice = PracticeService::glaciers(settings, Clock::default_clock())?;
            tracing::info!(
                timer_secs = parsed.timer_secs,
                category = %parsed.category,
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                practice: Arc::new(practice),
            });
            let context = build_app_context(&app);

            // Some dev setups open tao windows always-on-top; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Glacier Reading Practice")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_timer_and_category_flags() {
        let parsed =
            Args::parse_ui(&mut args(&["--timer-secs", "600", "--category", "matching"])).unwrap();
        assert_eq!(parsed.timer_secs, 600);
        assert_eq!(parsed.category, QuestionKind::Matching);
        assert_eq!(parsed.settings().unwrap().timer_start_secs(), 600);
    }

    #[test]
    fn rejects_zero_timer_and_unknown_category() {
        assert!(matches!(
            Args::parse_ui(&mut args(&["--timer-secs", "0"])),
            Err(ArgsError::InvalidTimerSecs { .. })
        ));
        assert!(matches!(
            Args::parse_ui(&mut args(&["--category", "essay"])),
            Err(ArgsError::InvalidCategory { .. })
        ));
        assert!(matches!(
            Args::parse_ui(&mut args(&["--category"])),
            Err(ArgsError::MissingValue { flag: "--category" })
        ));
    }

    #[test]
    fn check_accepts_builtin_catalog() {
        assert!(check_catalog().is_ok());
    }
}
