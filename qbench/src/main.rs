//! QBench CLI entry point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qbench::{run, trace, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs on stderr, reports on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run::execute(&args)?,
        Commands::Trace(args) => trace::execute(&args)?,
    }

    Ok(())
}
