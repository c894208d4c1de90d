//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::export::ExportArgs;

#[derive(Parser)]
#[command(name = "leysync")]
#[command(about = "HoYoLAB to GOOD converter", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a HoYoLAB character detail response to GOOD
    #[command(visible_alias = "c")]
    Convert {
        /// HoYoLAB response JSON ("-" for stdin)
        input: PathBuf,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Parse a HoYoLAB response into the intermediate model
    #[command(visible_alias = "p")]
    Parse {
        /// HoYoLAB response JSON ("-" for stdin)
        input: PathBuf,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip characters that fail to parse instead of aborting
        #[arg(long)]
        skip_invalid: bool,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Export a previously parsed model as GOOD
    #[command(visible_alias = "f")]
    Format {
        /// Model JSON written by `leysync parse` ("-" for stdin)
        input: PathBuf,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Show the characters in a HoYoLAB response
    #[command(visible_alias = "i")]
    Inspect {
        /// HoYoLAB response JSON ("-" for stdin)
        input: PathBuf,
    },

    /// Configure default export options
    Configure {
        /// Drop Manekin/Manekina by default
        #[arg(long)]
        remove_manekin: Option<bool>,

        /// Append the element to the Traveler key by default
        #[arg(long)]
        traveler_element: Option<bool>,

        /// Default minimum character level (0 exports everyone)
        #[arg(long)]
        min_level: Option<u32>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
