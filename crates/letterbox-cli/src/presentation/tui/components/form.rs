use letterbox_types::FormField;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::tui::app::TuiApp;

const CARET: &str = "█";

pub(crate) struct FormComponent;

impl FormComponent {
    fn field(&self, f: &mut Frame, area: Rect, state: &TuiApp, field: FormField) {
        let focused = state.form.focus() == field;
        let border = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(format!(" {} ", field.label()));

        let mut text = state.form.value(field).to_string();
        if focused {
            text.push_str(CARET);
        }

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

impl Component for FormComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            " Write a letter",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(heading), rows[0]);

        let top = Layout::horizontal([Constraint::Min(10), Constraint::Length(16)]).split(rows[1]);
        self.field(f, top[0], state, FormField::Title);
        self.field(f, top[1], state, FormField::Date);

        let people =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[2]);
        self.field(f, people[0], state, FormField::Sender);
        self.field(f, people[1], state, FormField::Recipient);

        self.field(f, rows[3], state, FormField::Message);

        if let Some(error) = state.form.error() {
            let line = Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(Paragraph::new(line), rows[4]);
        }
    }
}
