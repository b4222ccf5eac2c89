use super::args::{Cli, Commands, OutputFormat};
use super::handlers;
use super::logging;
use anyhow::{Context, Result};
use letterbox_runtime::{Workspace, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())
        .context("Failed to resolve the data directory")?;
    let workspace = Workspace::open(&data_dir)
        .with_context(|| format!("Failed to load configuration from {}", data_dir.display()))?;

    if matches!(cli.command, Some(Commands::Tui)) {
        logging::init_file(cli.log_level, &workspace.log_path())?;
    } else {
        logging::init_stderr(cli.log_level);
    }
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let json = cli.format == OutputFormat::Json;

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&workspace, json);
    };

    match command {
        Commands::Init => handlers::init::handle(&workspace, json),

        Commands::Write {
            title,
            date,
            sender,
            recipient,
            message,
        } => handlers::write::handle(
            &workspace,
            handlers::write::WriteArgs {
                title,
                date,
                sender,
                recipient,
                message,
            },
            json,
        ),

        Commands::List { layout } => handlers::list::handle(&workspace, layout.into(), json),

        Commands::Show { id } => handlers::show::handle(&workspace, id, json),

        Commands::Clear { yes } => handlers::clear::handle(&workspace, yes, json),

        Commands::Demo => handlers::demo::handle(&workspace, json),

        Commands::Tui => handlers::tui::handle(&workspace),
    }
}
