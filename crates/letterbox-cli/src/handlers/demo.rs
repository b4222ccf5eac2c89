use crate::presentation::presenters::present_demo;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use letterbox_runtime::{Clock, SystemClock, Workspace, seed_samples};

pub fn handle(workspace: &Workspace, json: bool) -> Result<()> {
    let store = workspace.store();
    let seeded = seed_samples(&store, SystemClock.now()).context("Could not save letters")?;
    let total = store.load().len();

    ConsoleRenderer::new(json).render(present_demo(seeded, total))
}
