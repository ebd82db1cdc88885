// main.rs - Console Game of Life on a wrapping board

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use life_console::{AnsiRenderer, Cli, NullRenderer, Outcome, RunConfig, Simulation, console, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.into_config();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let outcome = runtime.block_on(simulate(config))?;
    println!("finished: {outcome}");
    Ok(())
}

/// Logs go to stderr; stdout carries the frames.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn simulate(config: RunConfig) -> Result<Outcome> {
    let grid = config
        .seed
        .build(config.width, config.height)
        .context("failed to build the starting board")?;
    let mut sim = Simulation::new(grid);

    // Stop at the next frame on Ctrl-C. If the handler can't be installed, run to the end.
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    if !config.render {
        return run(&mut sim, &mut NullRenderer, &config.settings, shutdown).await;
    }

    if let Err(err) = console::enable_ansi() {
        warn!(%err, "could not enable ANSI escapes on this console");
    }
    let mut renderer = AnsiRenderer::new(io::stdout());
    run(&mut sim, &mut renderer, &config.settings, shutdown).await
}
