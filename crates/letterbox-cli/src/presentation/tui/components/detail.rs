use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::formatters::format_long_date_with_weekday;
use crate::presentation::tui::app::TuiApp;
use crate::presentation::views::letter::SIGNATURE;

pub(crate) struct DetailComponent;

const CLOSE_LABEL: &str = " Esc close ";

/// Where the right-aligned bottom title lands on the border of `content`
fn close_control(content: Rect) -> Rect {
    let inner_width = content.width.saturating_sub(2);
    let width = (CLOSE_LABEL.chars().count() as u16).min(inner_width);
    Rect {
        x: content.right().saturating_sub(1 + width),
        y: content.bottom().saturating_sub(1),
        width,
        height: 1,
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl Component for DetailComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut TuiApp) {
        let Some(letter) = &state.detail else {
            return;
        };

        let content = centered(area, 80, 80);
        f.render_widget(Clear, content);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(Span::styled(
                format!(" {} ", letter.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(CLOSE_LABEL).right_aligned());

        let mut lines = vec![
            Line::from(Span::styled(
                format_long_date_with_weekday(letter.date),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(format!("To: {}", letter.recipient)),
            Line::from(""),
        ];
        lines.extend(letter.message.split('\n').map(|l| Line::from(l.to_string())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            SIGNATURE,
            Style::default().fg(Color::Magenta),
        )));
        lines.push(Line::from(Span::styled(
            letter.sender.clone(),
            Style::default().fg(Color::Magenta),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.detail_scroll, 0));
        f.render_widget(paragraph, content);

        state.areas.overlay_content = Some(content);
        state.areas.overlay_close = Some(close_control(content));
    }
}
