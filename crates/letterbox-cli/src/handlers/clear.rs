use crate::presentation::presenters::present_cleared;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use letterbox_runtime::{CLEARED_MESSAGE, DELETE_ALL_PROMPT, Workspace};
use std::io::{self, BufRead, Write};

pub fn handle(workspace: &Workspace, yes: bool, json: bool) -> Result<()> {
    let mut repository = workspace.repository();
    let confirmed = yes || confirm(DELETE_ALL_PROMPT)?;

    let removed = if confirmed {
        let count = repository.len();
        repository.clear_all().context("Could not save letters")?;
        count
    } else {
        tracing::info!("delete-all declined");
        0
    };

    ConsoleRenderer::new(json).render(present_cleared(removed, confirmed, CLEARED_MESSAGE))
}

/// Ask on stderr, answer on stdin. Anything but y/yes (including EOF)
/// declines.
fn confirm(prompt: &str) -> Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", prompt)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
