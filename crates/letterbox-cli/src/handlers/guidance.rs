use crate::presentation::presenters::present_guidance;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use letterbox_runtime::Workspace;

pub fn handle(workspace: &Workspace, json: bool) -> Result<()> {
    let letter_count = workspace.store().load().len();
    let initialized = workspace.config_path().exists();

    let result = present_guidance(
        workspace.data_dir().display().to_string(),
        initialized,
        letter_count,
    );
    ConsoleRenderer::new(json).render(result)
}
