pub mod letter;
pub mod system;

pub use letter::{LetterDetailView, LetterListView, LetterSavedView, LettersClearedView};
pub use system::{DemoView, GuidanceView, InitView};

use owo_colors::OwoColorize;

/// Outer width of a grid card, borders included
pub const CARD_WIDTH: usize = 64;

/// Column width used when wrapping a full letter
pub const LETTER_WIDTH: usize = 72;

pub(crate) fn bold(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn dim(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn accent(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.magenta().to_string()
    } else {
        text.to_string()
    }
}
