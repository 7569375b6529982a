//! Savanna Historian CLI - classify historical landscape descriptions.

use clap::Parser;
use savanna_cli::commands;
use savanna_cli::config::load_config;
use savanna_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so JSON output stays clean)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> savanna_cli::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or_default();
    let formatter = Formatter::new(format, !cli.no_color);

    let output = match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, config, &formatter)?,
        Command::Recommend(args) => commands::execute_recommend(args, config, &formatter)?,
    };
    println!("{}", output);

    Ok(())
}
