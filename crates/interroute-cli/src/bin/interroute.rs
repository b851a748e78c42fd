//! `interroute` command line entry point.

use clap::Parser;
use interroute_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let value = run(&cli)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);
    Ok(())
}
