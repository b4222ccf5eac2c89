use chrono::NaiveDate;
use letterbox_types::{DisplayMode, Letter};

use crate::presentation::formatters::text::{is_truncated, preview};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LetterCardViewModel, LetterDetailViewModel,
    LetterListViewModel, LetterSavedViewModel, LettersClearedViewModel, StatusBadge,
};

pub fn present_letter_card(letter: &Letter, today: NaiveDate) -> LetterCardViewModel {
    LetterCardViewModel {
        id: letter.id.as_i64(),
        title: letter.title.clone(),
        date: letter.date,
        age_days: (today - letter.date).num_days(),
        preview: preview(&letter.message),
        truncated: is_truncated(&letter.message),
        sender: letter.sender.clone(),
        recipient: letter.recipient.clone(),
    }
}

pub fn present_letter_detail(letter: &Letter) -> LetterDetailViewModel {
    LetterDetailViewModel {
        id: letter.id.as_i64(),
        title: letter.title.clone(),
        date: letter.date,
        message: letter.message.clone(),
        sender: letter.sender.clone(),
        recipient: letter.recipient.clone(),
        created_at: letter.created_at,
    }
}

pub fn present_letter_list(
    letters: &[Letter],
    layout: DisplayMode,
    today: NaiveDate,
) -> CommandResultViewModel<LetterListViewModel> {
    let content = LetterListViewModel {
        layout,
        toggle_label: layout.toggle_label().to_string(),
        total: letters.len(),
        letters: letters
            .iter()
            .map(|letter| present_letter_card(letter, today))
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);

    if letters.is_empty() {
        result = result
            .with_suggestion(
                Guidance::new("Write your first letter")
                    .with_command("letterbox write --title <TITLE> --from <NAME> --to <NAME> --message <TEXT>"),
            )
            .with_suggestion(Guidance::new("Or load two sample letters").with_command("letterbox demo"));
    } else {
        let other = match layout {
            DisplayMode::Grid => "list",
            DisplayMode::List => "grid",
        };
        result = result
            .with_suggestion(
                Guidance::new("Read a letter in full").with_command("letterbox show <ID>"),
            )
            .with_suggestion(
                Guidance::new(layout.toggle_label())
                    .with_command(format!("letterbox list --layout {}", other)),
            );
    }

    result
}

pub fn present_saved(
    letter: &Letter,
    total: usize,
    today: NaiveDate,
    message: &str,
) -> CommandResultViewModel<LetterSavedViewModel> {
    CommandResultViewModel::new(LetterSavedViewModel {
        letter: present_letter_card(letter, today),
        total,
    })
    .with_badge(StatusBadge::success(message))
    .with_suggestion(
        Guidance::new("Read it back").with_command(format!("letterbox show {}", letter.id)),
    )
}

pub fn present_letter_shown(letter: &Letter) -> CommandResultViewModel<LetterDetailViewModel> {
    CommandResultViewModel::new(present_letter_detail(letter))
}

pub fn present_cleared(
    removed: usize,
    confirmed: bool,
    message: &str,
) -> CommandResultViewModel<LettersClearedViewModel> {
    let content = LettersClearedViewModel { confirmed, removed };

    if confirmed {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success(message))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Nothing was deleted"))
            .with_suggestion(
                Guidance::new("Skip the prompt").with_command("letterbox clear --yes"),
            )
    }
}
