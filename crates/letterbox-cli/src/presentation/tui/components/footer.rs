use letterbox_runtime::DELETE_ALL_PROMPT;
use letterbox_types::Section;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::tui::app::TuiApp;

pub(crate) struct FooterComponent;

impl FooterComponent {
    fn hints(state: &TuiApp) -> &'static str {
        if state.detail.is_some() {
            return "Esc/x close · j/k scroll · click outside to close";
        }
        match state.section {
            Section::Write => {
                "Tab/Shift+Tab field · Enter next · Ctrl+S save · Ctrl+L clear · F2 letters · Esc quit"
            }
            Section::View => {
                "arrows/hjkl select · Enter open · t layout · D delete all · F1/w write · q quit"
            }
        }
    }
}

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp) {
        let line = if state.confirm_delete {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", DELETE_ALL_PROMPT),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("[y/N]"),
            ])
        } else {
            Line::from(Span::styled(
                format!(" {}", Self::hints(state)),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let footer = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(footer, area);
    }
}
