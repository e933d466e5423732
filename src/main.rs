//! Job Application TUI - terminal form for applying to an open position
//!
//! A Ratatui-based TUI that collects applicant details, validates them and
//! shows a summary of the submitted application.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // Initialize logging; the terminal owns stdout and stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer(&config)),
        )
        .init();

    tracing::info!("Starting job application TUI");
    match config_error {
        Some(err) => tracing::warn!("Failed to load config, using defaults: {err:#}"),
        None => match config.save_if_missing() {
            Ok(Some(path)) => tracing::info!("Wrote default config to {}", path.display()),
            Ok(None) => {}
            Err(err) => tracing::warn!("Failed to write default config: {err:#}"),
        },
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_capture() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mouse_capture = config.mouse_capture();
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    tracing::info!("Exiting job application TUI");

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Fatal error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log file writer, or a sink when no log location is usable
fn log_writer(config: &AppConfig) -> BoxMakeWriter {
    let file = config.log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::sink),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Get terminal size for scroll calculations
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));
        // Keep the scroll offset valid after a resize
        app.state.scroll_offset = app.state.scroll_offset.min(app.max_scroll());

        let animating = app.update_dismiss_animation();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during animation (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_width, _height) => {
                    // Terminal was resized - offsets are clamped on next draw
                }
                _ => {}
            }
        }

        // Let delayed notifications run
        tokio::task::yield_now().await;
        app.process_form_events();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
