//! # CLI Layer
//!
//! This module is **one possible UI client** for the shop. It is the only place that:
//! - Knows about the terminal (prompts, colors, screen clearing, pauses)
//! - Installs the log subscriber
//! - Turns errors into exit codes (through `main`)
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: `--data-dir`, `--no-pause`, `--verbose` via clap
//! 2. **Context Setup**: data directory, configuration, store and API via `cafeapp::init`
//! 3. **Session**: hand a [`ConsoleTerminal`] and the API to the state machine and run it

use super::setup::parse_cli;
use super::states::{Settings, Shop};
use super::terminal::ConsoleTerminal;
use cafeapp::error::Result;
use cafeapp::init::initialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data_dir)?;
    info!(data_dir = %ctx.data_dir.display(), "shop open");

    let settings = Settings::new(&ctx.config, cli.no_pause);
    let mut term = ConsoleTerminal::new(ctx.config.clear_screen);
    Shop::new(&mut term, &mut ctx.api, settings).run()
}

/// Logs go to stderr so they never mix with the menus. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
