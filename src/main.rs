// threebody - a three-region panel that animates between layouts
//
// A panel of three stacked regions hangs from the bottom of the terminal.
// One control cycles it Collapsed -> Full -> Partial -> Full -> ..., and
// every change animates each region's height from wherever it is to its
// new target.
//
// Architecture:
// - Panel core: state machine plus a time-driven animation orchestrator
// - TUI (ratatui): frame ticker, input, bottom-anchored layout and rendering
// - Trace: the same core driven by synthetic time, printed as a table
// - Config: env > file > defaults, shared by both front ends

mod cli;
mod config;
mod logging;
mod panel;
mod trace;
mod tui;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (trace, config --show, --reset, --edit, --update)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Capture logs to a buffer so they never garble the alternate screen.
    // The guard must be kept alive for the duration of the program to ensure
    // file logs flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, LogSink::Tui(log_buffer.clone()));

    tracing::info!("threebody v{} starting", config::VERSION);

    if let Err(e) = tui::run_tui(config, log_buffer).await {
        tracing::error!("TUI error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
