use chrono::NaiveDate;
use std::fmt;

use crate::{Error, Result};

/// Input fields of the compose form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Date,
    Sender,
    Recipient,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Date,
        FormField::Sender,
        FormField::Recipient,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Date => "Date",
            FormField::Sender => "From",
            FormField::Recipient => "To",
            FormField::Message => "Message",
        }
    }

    pub fn next(&self) -> FormField {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FormField {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|field| field == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Title => write!(f, "title"),
            FormField::Date => write!(f, "date"),
            FormField::Sender => write!(f, "sender"),
            FormField::Recipient => write!(f, "recipient"),
            FormField::Message => write!(f, "message"),
        }
    }
}

/// Parse the date field (`YYYY-MM-DD`).
pub fn parse_letter_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField(FormField::Date));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| Error::InvalidDate(text.to_string()))
}
