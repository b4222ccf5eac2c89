use letterbox_types::Section;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::tui::app::TuiApp;

const TAB_WIDTH: u16 = 18;

pub(crate) struct NavComponent;

impl Component for NavComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Length(TAB_WIDTH),
            Constraint::Length(TAB_WIDTH),
            Constraint::Min(0),
        ])
        .split(inner);

        let brand = Paragraph::new(Line::from(Span::styled(
            " letterbox",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(brand, chunks[0]);

        for (section, tab_area) in Section::ALL.iter().zip([chunks[1], chunks[2]]) {
            let key = match section {
                Section::Write => "F1",
                Section::View => "F2",
            };
            let style = if *section == state.section {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = Line::from(vec![
                Span::styled(format!(" {} ", section.title()), style),
                Span::styled(format!(" {}", key), Style::default().fg(Color::DarkGray)),
            ]);
            f.render_widget(Paragraph::new(label), tab_area);
            state.areas.nav.push((*section, tab_area));
        }
    }
}
