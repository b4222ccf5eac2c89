mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "letterbox")]
#[command(about = "Write, keep and reread short letters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $LETTERBOX_PATH, then the system data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
