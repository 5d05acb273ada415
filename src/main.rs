use anyhow::Result;
use clap::Parser;
use colored::*;
use seolens::cli::Cli;
use seolens::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "seolens=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
