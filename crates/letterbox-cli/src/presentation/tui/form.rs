use chrono::NaiveDate;
use letterbox_types::{Error, FormField, LetterInput, parse_letter_date};

/// Text buffers of the compose form plus the focused field.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    title: String,
    date: String,
    sender: String,
    recipient: String,
    message: String,
    focus: Option<FormField>,
    error: Option<String>,
}

impl FormState {
    /// Empty every field, date it `today` and focus the title.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self {
            date: today.format("%Y-%m-%d").to_string(),
            focus: Some(FormField::Title),
            ..Self::default()
        };
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Date => &self.date,
            FormField::Sender => &self.sender,
            FormField::Recipient => &self.recipient,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Date => &mut self.date,
            FormField::Sender => &mut self.sender,
            FormField::Recipient => &mut self.recipient,
            FormField::Message => &mut self.message,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus.unwrap_or(FormField::Title)
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus().next());
    }

    pub fn focus_previous(&mut self) {
        self.focus = Some(self.focus().previous());
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focus();
        self.value_mut(field).push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        let field = self.focus();
        self.value_mut(field).pop();
    }

    /// Enter breaks a line in the message and moves on everywhere else.
    pub fn enter(&mut self) {
        if self.focus() == FormField::Message {
            self.message.push('\n');
        } else {
            self.focus_next();
        }
    }

    /// Inline validation message, if the last submit was rejected
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Build a submission, or record the first problem and focus its field.
    pub fn submit(&mut self) -> Option<LetterInput> {
        match self.to_input() {
            Ok(input) => {
                self.error = None;
                Some(input)
            }
            Err(err) => {
                let field = match &err {
                    Error::MissingField(field) => *field,
                    Error::InvalidDate(_) => FormField::Date,
                };
                self.focus = Some(field);
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn to_input(&self) -> letterbox_types::Result<LetterInput> {
        if self.title.is_empty() {
            return Err(Error::MissingField(FormField::Title));
        }
        let date = parse_letter_date(&self.date)?;
        let input = LetterInput {
            title: self.title.clone(),
            date,
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            message: self.message.clone(),
        };
        input.validate()?;
        Ok(input)
    }
}
