//! Shared export flags

use clap::Args;

/// Export options given on the command line.
///
/// Unset flags fall back to the configured defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Drop Manekin/Manekina and their gear (`--remove-manekin=false` to keep them)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub remove_manekin: Option<bool>,

    /// Export the Traveler as e.g. TravelerAnemo
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub traveler_element: Option<bool>,

    /// Drop characters below this level and their gear (0 exports everyone)
    #[arg(long)]
    pub min_level: Option<u32>,

    /// Log and skip characters or artifacts that fail to convert
    #[arg(long)]
    pub skip_invalid: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}
