use super::enums::Layout;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory and a default config.toml")]
    Init,

    #[command(about = "Write a new letter")]
    Write {
        #[arg(long)]
        title: String,

        /// Letter date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long = "from")]
        sender: String,

        #[arg(long = "to")]
        recipient: String,

        /// Letter body; pass '-' to read it from stdin
        #[arg(long)]
        message: String,
    },

    #[command(about = "Show all letters, newest first")]
    List {
        #[arg(long, default_value = "grid")]
        layout: Layout,
    },

    #[command(about = "Read one letter in full")]
    Show {
        /// Letter id as shown by 'letterbox list'
        id: i64,
    },

    #[command(about = "Delete every letter")]
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    #[command(about = "Add two sample letters when there are none")]
    Demo,

    #[command(about = "Open the interactive letter box")]
    Tui,
}
