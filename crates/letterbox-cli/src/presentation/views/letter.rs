use std::fmt;

use letterbox_types::DisplayMode;

use super::{CARD_WIDTH, LETTER_WIDTH, accent, bold, dim};
use crate::presentation::formatters::{
    fit, format_long_date, format_long_date_with_weekday, format_relative_date, wrap,
};
use crate::presentation::view_models::{
    DisplayOptions, LetterCardViewModel, LetterDetailViewModel, LetterListViewModel,
    LetterSavedViewModel, LettersClearedViewModel,
};

pub const EMPTY_TITLE: &str = "No letters yet";
pub const EMPTY_HINT: &str = "Write your first heartfelt letter to get started!";
pub const SIGNATURE: &str = "With love,";

fn meta_line(card: &LetterCardViewModel) -> String {
    format!("From: {} · To: {}", card.sender, card.recipient)
}

// --------------------------------------------------------
// Letter List View
// --------------------------------------------------------

pub struct LetterListView<'a> {
    data: &'a LetterListViewModel,
    options: DisplayOptions,
}

impl<'a> LetterListView<'a> {
    pub fn new(data: &'a LetterListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_empty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "📭 {}", bold(EMPTY_TITLE, self.options.enable_color))?;
        writeln!(f, "{}", EMPTY_HINT)
    }

    fn render_grid(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;
        let inner = CARD_WIDTH - 4;
        let horizontal = "─".repeat(CARD_WIDTH - 2);

        for (i, card) in self.data.letters.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            let date = format_long_date(card.date);
            let title_width = inner.saturating_sub(date.chars().count() + 1);
            let head = format!("{} {}", fit(&card.title, title_width), date);

            writeln!(f, "╭{}╮", horizontal)?;
            writeln!(f, "│ {} │", bold(&head, color))?;
            writeln!(f, "│ {} │", fit("", inner))?;
            for line in wrap(&card.preview, inner) {
                writeln!(f, "│ {} │", fit(&line, inner))?;
            }
            writeln!(f, "│ {} │", fit("", inner))?;
            writeln!(f, "│ {} │", accent(&fit(&meta_line(card), inner), color))?;
            let footer = format!(
                "#{} · {}",
                card.id,
                format_relative_date(card.date, card.age_days)
            );
            writeln!(f, "│ {} │", dim(&fit(&footer, inner), color))?;
            writeln!(f, "╰{}╯", horizontal)?;
        }

        Ok(())
    }

    fn render_list(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        for card in &self.data.letters {
            writeln!(
                f,
                "{}  {}  {}",
                dim(&card.id.to_string(), color),
                format_long_date(card.date),
                bold(&card.title, color)
            )?;
            for line in wrap(&card.preview, LETTER_WIDTH) {
                writeln!(f, "    {}", line)?;
            }
            writeln!(f, "    {}", accent(&meta_line(card), color))?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for LetterListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.letters.is_empty() {
            return self.render_empty(f);
        }

        let noun = if self.data.total == 1 { "letter" } else { "letters" };
        writeln!(
            f,
            "{} ({} {})\n",
            bold("My Letters", self.options.enable_color),
            self.data.total,
            noun
        )?;

        match self.data.layout {
            DisplayMode::Grid => self.render_grid(f),
            DisplayMode::List => self.render_list(f),
        }
    }
}

// --------------------------------------------------------
// Letter Detail View
// --------------------------------------------------------

pub struct LetterDetailView<'a> {
    data: &'a LetterDetailViewModel,
    options: DisplayOptions,
}

impl<'a> LetterDetailView<'a> {
    pub fn new(data: &'a LetterDetailViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for LetterDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        writeln!(f, "{}", bold(&self.data.title, color))?;
        writeln!(
            f,
            "{}",
            dim(&format_long_date_with_weekday(self.data.date), color)
        )?;
        writeln!(f, "To: {}", self.data.recipient)?;
        writeln!(f, "{}", "─".repeat(LETTER_WIDTH))?;
        for line in wrap(&self.data.message, LETTER_WIDTH) {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", accent(SIGNATURE, color))?;
        writeln!(f, "{}", accent(&self.data.sender, color))
    }
}

// --------------------------------------------------------
// Write / Clear Results
// --------------------------------------------------------

pub struct LetterSavedView<'a> {
    data: &'a LetterSavedViewModel,
    options: DisplayOptions,
}

impl<'a> LetterSavedView<'a> {
    pub fn new(data: &'a LetterSavedViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for LetterSavedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = &self.data.letter;
        writeln!(
            f,
            "{} ({})",
            bold(&letter.title, self.options.enable_color),
            format_long_date(letter.date)
        )?;
        writeln!(f, "{}", meta_line(letter))?;
        writeln!(f, "Id: {}", letter.id)?;
        writeln!(f, "Letters in your letterbox: {}", self.data.total)
    }
}

pub struct LettersClearedView<'a> {
    data: &'a LettersClearedViewModel,
}

impl<'a> LettersClearedView<'a> {
    pub fn new(data: &'a LettersClearedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LettersClearedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.confirmed {
            writeln!(f, "Removed {} letter(s).", self.data.removed)
        } else {
            writeln!(f, "Your letters were left untouched.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn card(id: i64, title: &str, preview: &str) -> LetterCardViewModel {
        LetterCardViewModel {
            id,
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            age_days: 0,
            preview: preview.to_string(),
            truncated: false,
            sender: "Sarah".to_string(),
            recipient: "Mom".to_string(),
        }
    }

    fn list(layout: DisplayMode, letters: Vec<LetterCardViewModel>) -> LetterListViewModel {
        LetterListViewModel {
            layout,
            toggle_label: layout.toggle_label().to_string(),
            total: letters.len(),
            letters,
        }
    }

    #[test]
    fn test_empty_state() {
        let data = list(DisplayMode::Grid, vec![]);
        let out = LetterListView::new(&data, DisplayOptions::plain()).to_string();
        assert_eq!(
            out,
            "📭 No letters yet\nWrite your first heartfelt letter to get started!\n"
        );
    }

    #[test]
    fn test_grid_cards_have_fixed_width() {
        let data = list(DisplayMode::Grid, vec![card(1, "Dear Mom", "hello there")]);
        let out = LetterListView::new(&data, DisplayOptions::plain()).to_string();

        let card_lines: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with('│') || l.starts_with('╭') || l.starts_with('╰'))
            .collect();
        assert!(!card_lines.is_empty());
        for line in card_lines {
            assert_eq!(line.chars().count(), CARD_WIDTH, "line: {:?}", line);
        }
        assert!(out.contains("January 15, 2024"));
        assert!(out.contains("From: Sarah · To: Mom"));
        assert!(out.contains("#1 · Today"));
    }

    #[test]
    fn test_list_layout_one_header_per_letter() {
        let data = list(
            DisplayMode::List,
            vec![card(2, "Second", "b"), card(1, "First", "a")],
        );
        let out = LetterListView::new(&data, DisplayOptions::plain()).to_string();

        let second = out.find("2  January 15, 2024  Second").unwrap();
        let first = out.find("1  January 15, 2024  First").unwrap();
        assert!(second < first);
        assert!(out.starts_with("My Letters (2 letters)"));
    }

    #[test]
    fn test_detail_signature() {
        let data = LetterDetailViewModel {
            id: 7,
            title: "Dear Mom".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            message: "Thank you.".to_string(),
            sender: "Sarah".to_string(),
            recipient: "Mom".to_string(),
            created_at: chrono::Utc::now(),
        };
        let out = LetterDetailView::new(&data, DisplayOptions::plain()).to_string();

        assert!(out.contains("Monday, January 15, 2024"));
        assert!(out.contains("To: Mom"));
        assert!(out.ends_with("Thank you.\n\nWith love,\nSarah\n"));
    }
}
