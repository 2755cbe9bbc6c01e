//! Line-oriented host for platforms without a tray implementation.
//!
//! Reads commands from stdin on a helper thread and publishes the matching
//! events; the main thread blocks on the bus and dispatches them.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::app::App;
use crate::events::{AppEvent, EventPublisher};
use crate::handlers::Flow;
use crate::model::{Mirror, SharedState, UnknownMirror, APP_TITLE};
use crate::update::relaunch;

/// A console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Toggle,
    Mirror(Mirror),
    Update,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("usage: mirror <vxtwitter|fxtwitter|fixupx>")]
    MissingMirror,
    #[error(transparent)]
    Mirror(#[from] UnknownMirror),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "pause" => Command::Pause,
        "resume" => Command::Resume,
        "toggle" => Command::Toggle,
        "mirror" => {
            let name = words.next().ok_or(CommandError::MissingMirror)?;
            Command::Mirror(name.parse()?)
        }
        "update" => Command::Update,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

impl Command {
    /// Event to publish, if any. Pause and Resume only toggle when the
    /// flag is not already in the requested state.
    pub fn event(self, state: &SharedState) -> Option<AppEvent> {
        match self {
            Command::Pause if state.is_monitoring() => Some(AppEvent::ToggleMonitoring),
            Command::Resume if !state.is_monitoring() => Some(AppEvent::ToggleMonitoring),
            Command::Pause | Command::Resume => None,
            Command::Toggle => Some(AppEvent::ToggleMonitoring),
            Command::Mirror(mirror) => Some(AppEvent::SelectMirror(mirror)),
            Command::Update => Some(AppEvent::CheckForUpdates),
            Command::Quit => Some(AppEvent::Quit),
            Command::Status | Command::Help => None,
        }
    }
}

fn status_line(state: &SharedState) -> String {
    format!(
        "monitoring: {}, mirror: {}",
        if state.is_monitoring() { "on" } else { "paused" },
        state.mirror()
    )
}

fn print_help() {
    println!("{APP_TITLE}");
    println!("  pause | resume | toggle   control clipboard monitoring");
    println!("  mirror <name>             vxtwitter, fxtwitter or fixupx");
    println!("  update                    check for a new version");
    println!("  status                    show current settings");
    println!("  quit                      exit");
}

fn read_commands(publisher: EventPublisher, state: Arc<SharedState>) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };
        match parse_command(&line) {
            Ok(Some(Command::Status)) => println!("{}", status_line(&state)),
            Ok(Some(Command::Help)) => print_help(),
            Ok(Some(command)) => {
                if let Some(event) = command.event(&state) {
                    publisher.publish(event);
                }
            }
            Ok(None) => {}
            Err(e) => println!("{e}"),
        }
    }
    debug!("Console input closed");
}

/// Run the console host until `quit`.
pub fn run(mut app: App) -> anyhow::Result<()> {
    app.start_background()
        .context("failed to start background threads")?;

    let publisher = app.publisher();
    let state = Arc::clone(app.state());
    thread::Builder::new()
        .name("console-input".into())
        .spawn(move || read_commands(publisher, state))
        .context("failed to start the console reader")?;

    print_help();
    loop {
        match app.wait() {
            Flow::Continue => {}
            Flow::Exit => break,
            Flow::Restart(exe) => {
                if let Err(e) = relaunch(&exe) {
                    error!("Update installed but restart failed: {}", e);
                }
                break;
            }
        }
    }
    info!("Exiting");
    Ok(())
}
