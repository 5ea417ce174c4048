//! Terminal UI for noughts.

mod app;
mod input;
mod theme;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::Controller;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use app::App;

/// Time between frames.
const FRAME: Duration = Duration::from_millis(33);

/// Run the terminal UI until the user quits.
#[instrument(skip(config), fields(think_time_ms = config.think_time_ms()))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    init_file_logging(config.log_file())?;
    info!("Starting noughts TUI");

    let settings = config.to_session_settings();
    let controller = match config.seed() {
        Some(seed) => Controller::seeded(settings, *seed),
        None => Controller::new(settings),
    };
    let mut app = App::new(controller);

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI exited");
    res
}

/// Runs the terminal setup that follows raw mode, undoing it if a step fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|e| {
        error!(error = %e, "Terminal setup failed, restoring terminal");
        restore();
    })
}

/// Logs to a file so output does not interfere with the terminal UI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut interval = tokio::time::interval(FRAME);
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Drain pending input without blocking the frame.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
            {
                app.on_key(key.code);
            }
        }
        if app.should_quit() {
            return Ok(());
        }

        app.on_tick(Instant::now());
        interval.tick().await;
    }
}
