use crate::presentation::presenters::present_saved;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use letterbox_runtime::{Clock, SAVED_MESSAGE, SystemClock, Workspace};
use letterbox_types::{LetterInput, parse_letter_date};
use std::io::{self, Read};

pub struct WriteArgs {
    pub title: String,
    pub date: Option<String>,
    pub sender: String,
    pub recipient: String,
    pub message: String,
}

pub fn handle(workspace: &Workspace, args: WriteArgs, json: bool) -> Result<()> {
    let clock = SystemClock;

    let message = if args.message == "-" {
        read_message_from_stdin()?
    } else {
        args.message
    };

    let date = match args.date.as_deref() {
        Some(text) => parse_letter_date(text)?,
        None => clock.today(),
    };

    let input = LetterInput {
        title: args.title,
        date,
        sender: args.sender,
        recipient: args.recipient,
        message,
    };
    input.validate()?;

    let mut repository = workspace.repository();
    let letter = repository
        .insert_front_at(input, clock.now())
        .context("Could not save letters")?;

    let result = present_saved(&letter, repository.len(), clock.today(), SAVED_MESSAGE);
    ConsoleRenderer::new(json).render(result)
}

fn read_message_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read message from stdin")?;

    // A trailing newline from `echo` or a heredoc is not part of the letter.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}
