//! foyer - a single-page terminal portfolio.
//!
//! Entry point: parses arguments, wires logging, loads configuration,
//! and hands off to the page loop.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use foyer_tui::app;
use foyer_tui::config::Config;

/// A single-page terminal portfolio with a typewritten intro.
#[derive(Debug, Parser)]
#[command(name = "foyer", version, about)]
struct Cli {
    /// Disable keystroke clicks.
    #[arg(long)]
    no_sound: bool,

    /// Per-character reveal interval for the intro, in milliseconds.
    #[arg(long, value_name = "MS")]
    speed_ms: Option<u64>,

    /// Path to a config file (default: <config dir>/foyer/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write trace-level logs to ./foyer-debug.log.
    #[arg(long)]
    debug: bool,
}

/// Guard that flushes the debug log file when dropped.
struct DebugLogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Set up debug file logging that writes trace-level logs to a file.
///
/// The TUI owns the terminal, so logs can never go to stdout/stderr
/// while it runs; a file is the only safe sink.
fn setup_debug_file_logging() -> Result<DebugLogGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let path = std::env::current_dir()?.join("foyer-debug.log");
    let file = std::fs::File::create(&path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("trace"))
        .with(file_layer)
        .init();

    Ok(DebugLogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _debug_guard = if cli.debug {
        Some(setup_debug_file_logging()?)
    } else {
        None
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_sound {
        config.sound = false;
    }
    if let Some(ms) = cli.speed_ms {
        config.type_interval_ms = ms;
    }

    app::run(config).await
}
