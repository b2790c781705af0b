use std::io;
use std::time::Instant;

use anyhow::{Context as _, Result};
use clap::Parser;
use tick_api::ReqwestTransport;
use tracing_subscriber::EnvFilter;

use tick_cli::{Cli, Config, Context, branch, execute};

fn main() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so command output on stdout stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let transport = ReqwestTransport::new().context("failed to create HTTP client")?;
    let context = Context::new(transport, &config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to initialize tokio runtime")?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    runtime.block_on(execute(
        command,
        started,
        context,
        &mut input,
        &mut output,
        || {
            std::env::current_dir()
                .ok()
                .and_then(|dir| branch::current_branch(&dir))
        },
    ))
}
