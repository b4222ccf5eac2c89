use crate::presentation::presenters::present_init;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use letterbox_runtime::Workspace;

pub fn handle(workspace: &Workspace, json: bool) -> Result<()> {
    let outcome = workspace.init().with_context(|| {
        format!(
            "Failed to initialize data directory: {}",
            workspace.data_dir().display()
        )
    })?;

    let store = workspace.store();
    let result = present_init(
        &outcome,
        workspace.data_dir().display().to_string(),
        store.location(),
        store.load().len(),
    );
    ConsoleRenderer::new(json).render(result)
}
