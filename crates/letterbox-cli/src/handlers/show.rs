use crate::presentation::presenters::present_letter_shown;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, bail};
use letterbox_runtime::Workspace;
use letterbox_types::LetterId;

pub fn handle(workspace: &Workspace, id: i64, json: bool) -> Result<()> {
    let repository = workspace.repository();
    let id = LetterId::new(id);

    let Some(letter) = repository.all().iter().find(|letter| letter.id == id) else {
        bail!("No letter with id {} (run 'letterbox list' to see ids)", id);
    };

    ConsoleRenderer::new(json).render(present_letter_shown(letter))
}
