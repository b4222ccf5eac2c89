//! Letters built for tests and placed directly into slot files.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use letterbox_store::{DEFAULT_STORAGE_KEY, FileSlots, Store};
use letterbox_types::{Letter, LetterInput};
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the default slot file under `data_dir`
pub fn slot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{}.json", DEFAULT_STORAGE_KEY))
}

/// A letter stamped at `2024-01-<day> 12:00 UTC` and dated that day.
pub fn letter_on(day: u32, title: &str, sender: &str, recipient: &str, message: &str) -> Letter {
    let date = NaiveDate::from_ymd_opt(2024, 1, day).expect("valid January day");
    let input = LetterInput {
        title: title.to_string(),
        date,
        sender: sender.to_string(),
        recipient: recipient.to_string(),
        message: message.to_string(),
    };
    Letter::stamp(input, noon(day))
}

/// Two letters, newest first, as the store would hold them.
pub fn two_letters() -> Vec<Letter> {
    vec![
        letter_on(20, "Thank you", "Sam", "Kim", "Thanks for the tea."),
        letter_on(10, "Hello again", "Kim", "Sam", "It has been a while."),
    ]
}

pub fn write_letters(data_dir: &Path, letters: &[Letter]) -> Result<()> {
    let store = Store::new(FileSlots::new(data_dir), DEFAULT_STORAGE_KEY);
    store.save(letters)?;
    Ok(())
}

pub fn write_raw_slot(data_dir: &Path, content: &str) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    fs::write(slot_path(data_dir), content)?;
    Ok(())
}

pub fn read_letters(data_dir: &Path) -> Vec<Letter> {
    Store::new(FileSlots::new(data_dir), DEFAULT_STORAGE_KEY).load()
}

fn noon(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}
