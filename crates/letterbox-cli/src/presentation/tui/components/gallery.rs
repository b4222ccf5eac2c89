use letterbox_types::{DisplayMode, Letter};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::formatters::{format_long_date, preview};
use crate::presentation::tui::app::TuiApp;
use crate::presentation::views::letter::{EMPTY_HINT, EMPTY_TITLE};

const GRID_CARD_HEIGHT: u16 = 9;
const LIST_CARD_HEIGHT: u16 = 6;
const MIN_CARD_WIDTH: u16 = 32;
const MAX_COLUMNS: usize = 3;

pub(crate) struct GalleryComponent;

impl GalleryComponent {
    fn header(&self, f: &mut Frame, area: Rect, state: &TuiApp) {
        let halves =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(36)]).split(area);

        let title = Line::from(vec![
            Span::styled(" My Letters", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" ({})", state.letters.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(title), halves[0]);

        let controls = Line::from(vec![
            Span::styled("t ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "{} {}",
                state.display_mode.toggle_icon(),
                state.display_mode.toggle_label()
            )),
            Span::styled("  D ", Style::default().fg(Color::DarkGray)),
            Span::styled("Delete All ", Style::default().fg(Color::Red)),
        ]);
        f.render_widget(
            Paragraph::new(controls).alignment(Alignment::Right),
            halves[1],
        );
    }

    fn empty(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(EMPTY_HINT, Style::default().fg(Color::Gray))),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn card(&self, f: &mut Frame, area: Rect, letter: &Letter, selected: bool) {
        let border = if selected {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(
                format!(" {} ", letter.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        f.render_widget(
            Paragraph::new(Span::styled(
                format_long_date(letter.date),
                Style::default().fg(Color::DarkGray),
            )),
            rows[0],
        );
        f.render_widget(
            Paragraph::new(preview(&letter.message)).wrap(Wrap { trim: true }),
            rows[1],
        );
        let meta = Line::from(vec![
            Span::styled("From: ", Style::default().fg(Color::DarkGray)),
            Span::raw(letter.sender.as_str()),
            Span::styled("  To: ", Style::default().fg(Color::DarkGray)),
            Span::raw(letter.recipient.as_str()),
        ]);
        f.render_widget(Paragraph::new(meta), rows[2]);
    }
}

impl Component for GalleryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
        self.header(f, chunks[0], state);

        let body = chunks[1];
        if state.letters.is_empty() {
            self.empty(f, body);
            return;
        }

        let (columns, card_height) = match state.display_mode {
            DisplayMode::Grid => (
                ((body.width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS),
                GRID_CARD_HEIGHT,
            ),
            DisplayMode::List => (1, LIST_CARD_HEIGHT),
        };
        state.columns = columns;

        let selected = state.selected.min(state.letters.len() - 1);
        let visible_rows = ((body.height / card_height) as usize).max(1);
        let first_row = (selected / columns).saturating_sub(visible_rows - 1);

        let row_constraints = vec![Constraint::Length(card_height); visible_rows];
        let row_areas = Layout::vertical(row_constraints).split(body);
        let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

        for (offset, row_area) in row_areas.iter().enumerate() {
            let row = first_row + offset;
            let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);

            for (column, cell) in cells.iter().enumerate() {
                let index = row * columns + column;
                let Some(letter) = state.letters.get(index) else {
                    break;
                };
                self.card(f, *cell, letter, index == selected);
                state.areas.cards.push((index, *cell));
            }
        }
    }
}
