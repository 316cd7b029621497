// ABOUTME: Main entry point for Caprae with TUI and CLI support
//
// Binary: caprae
// Usage: caprae [COMMAND]
// - No command: launches TUI at the configured start path
// - tui --path: launches TUI at the given path
// - routes: print the path table
// - list: filter one of the marketplace lists

#![allow(missing_docs)]

use anyhow::Result;
use caprae::app::{App, EventHandler};
use caprae::cli;
use caprae::components::LayoutComponent;
use caprae::config::AppConfig;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::List(list_args)) => cli::list::execute(list_args, args.format),
        Some(cli::Commands::Routes) => cli::routes::execute(args.format),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui(tui_args)) => launch_tui(tui_args).await,
        None => launch_tui(cli::TuiArgs::default()).await,
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn launch_tui(args: cli::TuiArgs) -> Result<()> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.path {
        config.start_path = path;
    }
    tracing::info!(start_path = %config.start_path, "Starting TUI");

    let mut app = App::new(config);
    let mut layout = LayoutComponent::new();

    // Flush any pending terminal events so stray keypresses don't reach the first page
    while crossterm::event::poll(Duration::from_millis(10)).unwrap_or(false) {
        let _ = crossterm::event::read();
    }

    run_tui(&mut app, &mut layout).await
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try `caprae list` or `caprae routes` when redirecting output."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = app.state.config.tick_rate();
    let mut last_tick = Instant::now();

    // Ignore key events for the first 100ms so buffered keypresses don't trigger actions
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                        tracing::debug!(
                            "Ignoring key event {:?} during startup guard period",
                            key_event.code
                        );
                        continue;
                    }

                    if let Some(app_event) =
                        EventHandler::handle_key_event(key_event, &mut app.state)
                    {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                // Redrawn at the top of the loop
                Event::Resize(_, _) => {}
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let Ok(base_dir) = AppConfig::base_dir() else {
        return;
    };
    let log_dir = base_dir.join("logs");
    let _ = std::fs::create_dir_all(&log_dir);

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "caprae-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; the TUI owns stdout so there is nowhere else to write
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caprae=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
