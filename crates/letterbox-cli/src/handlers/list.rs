use crate::presentation::presenters::present_letter_list;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use letterbox_runtime::{Clock, SystemClock, Workspace};
use letterbox_types::DisplayMode;

pub fn handle(workspace: &Workspace, layout: DisplayMode, json: bool) -> Result<()> {
    let repository = workspace.repository();
    let result = present_letter_list(repository.all(), layout, SystemClock.today());
    ConsoleRenderer::new(json).render(result)
}
