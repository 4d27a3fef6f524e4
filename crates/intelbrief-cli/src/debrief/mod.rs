//! Debrief command handlers for the CLI.
//!
//! These are called from `main` after configuration and the database pool
//! are established. `generate` runs the full fetch-synthesize-persist
//! pipeline; `list` and `show` are read-only queries over stored debriefs.

mod generate;
mod query;

use clap::Subcommand;

pub(crate) use generate::run_debrief_generate;
pub(crate) use query::{run_debrief_list, run_debrief_show};

/// Sub-commands available under `debrief`.
#[derive(Debug, Subcommand)]
pub enum DebriefCommands {
    /// Generate a new debrief from recent competitor news
    Generate {
        /// Number of days to look back (1-3650)
        #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(i64).range(1..=3650))]
        days: i64,
    },
    /// List stored debriefs, newest first
    List {
        /// Maximum number of debriefs to show
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Print the most recently generated debrief
    Show,
}
