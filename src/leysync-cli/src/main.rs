mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean
    let default_filter = if cli.verbose {
        "leysync=debug,leysync_cli=debug"
    } else {
        "leysync=info,leysync_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            export,
        } => {
            commands::convert::convert(&input, output.as_deref(), &export)?;
        }

        Commands::Parse {
            input,
            output,
            skip_invalid,
            compact,
        } => {
            commands::convert::parse(&input, output.as_deref(), skip_invalid, compact)?;
        }

        Commands::Format {
            input,
            output,
            export,
        } => {
            commands::convert::format(&input, output.as_deref(), &export)?;
        }

        Commands::Inspect { input } => {
            commands::inspect::inspect(&input)?;
        }

        Commands::Configure {
            remove_manekin,
            traveler_element,
            min_level,
            show,
        } => {
            commands::configure::handle(remove_manekin, traveler_element, min_level, show)?;
        }
    }

    Ok(())
}
