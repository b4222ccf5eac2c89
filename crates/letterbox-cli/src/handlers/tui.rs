use crate::presentation::tui;
use anyhow::Result;
use letterbox_runtime::Workspace;

pub fn handle(workspace: &Workspace) -> Result<()> {
    tui::run(workspace)
}
