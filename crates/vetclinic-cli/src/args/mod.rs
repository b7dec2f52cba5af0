// NOTE: Command Organization
//
// Namespaces follow the three record collections (pets, owners, records),
// each with the same verbs:
// - list / show <id>: read views
// - new: show the blank form with its choices
// - add k=v...: submit the form
// `shell` runs the same actions interactively and is the default.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vetclinic")]
#[command(about = "Browse and record pets, owners and vet visits", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: <config dir>/vetclinic/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "API base URL, e.g. http://localhost:8000/api")]
    pub api_base: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds (0 waits forever)")]
    pub timeout: Option<u64>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
