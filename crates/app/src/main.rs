use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use reveal_core::model::Show;
use reveal_core::time::Clock;
use services::{ShowRunner, builtin_show, load_show};
use ui::{App, UiApp, WebviewPlayback, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyShowPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyShowPath => write!(f, "--show requires a non-empty path"),
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
    show: Arc<Show>,
    runner: Arc<ShowRunner>,
}

impl UiApp for DesktopApp {
    fn show(&self) -> Arc<Show> {
        Arc::clone(&self.show)
    }

    fn runner(&self) -> Arc<ShowRunner> {
        Arc::clone(&self.runner)
    }
}

struct Args {
    show_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--show <show.json>]");
    eprintln!();
    eprintln!("Without --show the built-in show is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  REVEAL_SHOW");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut show_path = std::env::var("REVEAL_SHOW")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--show" => {
                    let value = require_value(args, "--show")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyShowPath);
                    }
                    show_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { show_path })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Load the show once at startup. Keep this in the binary glue so
    // core/services stay pure; shows are never reloaded at runtime.
    let show = match &parsed.show_path {
        Some(path) => load_show(path)?,
        None => builtin_show(),
    };

    let runner = Arc::new(ShowRunner::new(
        Clock::default_clock(),
        Arc::new(WebviewPlayback::new()),
    ));
    let app = DesktopApp {
        show: Arc::new(show),
        runner,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Reveal")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
