//! Flash toast in the top-right corner of the content area

use crate::state::{Flash, FlashKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

pub fn render_toast(frame: &mut Frame, area: Rect, flash: &Flash) {
    let (color, title) = match flash.kind {
        FlashKind::Success => (Color::Green, " ✓ Success "),
        FlashKind::Error => (Color::Red, " ✗ Error "),
    };

    let width = TOAST_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let rows = flash.message.chars().count().div_ceil(inner_width).max(1) as u16;
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: (rows + 2).min(area.height),
    };

    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(Line::from(Span::styled(
        flash.message.as_str(),
        Style::default().fg(Color::White),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(toast, toast_area);
}
