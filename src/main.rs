//! scaffold - a fixed header, scrollable body and fixed footer in the terminal.
//!
//! This binary runs the demo host. A config file (`./scaffold.json5` or the
//! user config directory) replaces the demo bands; the body is always the
//! generated demo content.

use std::path::Path;

use anyhow::Context;
use scaffold_config::{Config, persistence::find_config_file};
use scaffold_tui::{App, Layout, demo, terminal};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "scaffold.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Held until exit so buffered log lines are flushed.
    let _log_guard = configure_logging();

    let layout = load_layout()?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(layout);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    if let Err(err) = &result {
        tracing::error!(target: "runtime", error = %err, "run_failed");
    }
    result
}

/// Logs go to a file in the working directory: stdout belongs to the TUI.
/// Filtering follows `RUST_LOG`.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|()| guard)
}

fn load_layout() -> anyhow::Result<Layout> {
    let Some(path) = find_config_file() else {
        tracing::info!(target: "config", "config_defaults");
        return Ok(demo::layout());
    };

    let config = Config::load_from(&path)
        .inspect_err(|err| {
            tracing::warn!(target: "config", path = %path.display(), error = %err, "config_invalid");
        })
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    tracing::info!(
        target: "config",
        path = %path.display(),
        chrome_rows = config.chrome_height(),
        "config_loaded"
    );

    let mut layout = Layout::from_config(&config)
        .with_context(|| format!("invalid band style in {}", path.display()))?;
    layout.set_content(demo::content());
    Ok(layout)
}
