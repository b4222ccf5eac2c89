use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::Component;
use crate::presentation::tui::app::TuiApp;

pub(crate) struct NotificationComponent;

impl Component for NotificationComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp) {
        let Some(text) = &state.notification else {
            return;
        };

        let width = (text.chars().count() as u16 + 4).min(area.width);
        let toast = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height: 3.min(area.height),
        };

        let color = if text.starts_with("Could not") {
            Color::Red
        } else {
            Color::Green
        };

        f.render_widget(Clear, toast);
        f.render_widget(
            Paragraph::new(text.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
            toast,
        );
    }
}
