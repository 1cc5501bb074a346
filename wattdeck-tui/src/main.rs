//! WattDeck TUI — terminal dashboard for browsing retail electricity plans.
//!
//! Panels:
//! 1. Plans — filtered plan table, selection, details drill-down
//! 2. Filters — provider/term/renewable/max-rate predicates
//! 3. Compare — side-by-side view of selected plans
//! 4. Chart — rate bars against the TXU benchmark
//! 5. Help — keyboard reference and error history

mod app;
mod input;
mod theme;
mod ui;
mod worker;

#[cfg(test)]
mod test_helpers;

use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use wattdeck_core::{ApiClient, DEFAULT_API_BASE};

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

#[derive(Parser)]
#[command(name = "wattdeck", about = "WattDeck — electricity plan dashboard")]
struct Cli {
    /// Base URL of the plans API.
    #[arg(long, env = "WATTDECK_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    // Spawn worker owning the HTTP client
    let source = ApiClient::new(cli.api_base);
    let worker_handle = worker::spawn_worker(source, cmd_rx, resp_tx);

    // Build app state and fire the initial load exactly once.
    let mut app = AppState::new(cmd_tx.clone(), resp_rx);
    app.request_load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::DataLoaded { plans, providers } => {
            let msg = format!(
                "Loaded {} plans from {} providers",
                plans.len(),
                providers.len()
            );
            app.finish_load(plans, providers);
            app.set_status(msg);
        }
        WorkerResponse::LoadFailed { error } => {
            app.fail_load(error);
        }
    }
}
