//! Terminal UI for noughts.

mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{AppEvent, Flow, GameAdapter, Settings, TerminalBell, command_for_key};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Run the interactive game until the player quits.
pub async fn run_tui(settings: Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?settings, "Starting noughts TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            disable_raw_mode()
        },
    )?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_input_reader(event_tx.clone());

    let mut adapter = GameAdapter::new(&settings, Box::new(TerminalBell::stdout()), event_tx);
    let res = run_game(&mut terminal, &mut adapter, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?adapter.snapshot().scores, "Session ended");

    res
}

/// Runs `setup`, calling `restore` if it fails so the terminal is not left
/// in raw mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().inspect_err(|err| {
        warn!(error = %err, "Terminal setup failed, restoring");
        if let Err(e) = restore() {
            error!(error = %e, "Failed to restore terminal");
        }
    })
}

/// Draw, wait for the next event, apply it. Repeat.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    adapter: &mut GameAdapter,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, adapter))?;

        let Some(event) = event_rx.recv().await else {
            warn!("Event channel closed");
            return Ok(());
        };
        debug!(?event, "Event received");

        if adapter.handle_event(event) == Flow::Quit {
            return Ok(());
        }
    }
}

/// Reads terminal input on the blocking pool and forwards decoded commands.
///
/// The task polls with a short timeout so it notices when the loop has
/// gone away and exits on its own.
fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal input");
                    let _ = tx.send(AppEvent::InputClosed);
                    break;
                }
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => command_for_key(key).map(AppEvent::Command),
                Ok(Event::Resize(..)) => Some(AppEvent::Redraw),
                Ok(_) => None,
                Err(e) => {
                    warn!(error = %e, "Failed to read terminal input");
                    Some(AppEvent::InputClosed)
                }
            };

            if let Some(app_event) = app_event {
                let closing = app_event == AppEvent::InputClosed;
                if tx.send(app_event).is_err() || closing {
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    });
}
