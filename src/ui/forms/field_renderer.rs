//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field box needs, excluding its error line
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        8
    } else {
        3
    }
}

/// Draw a form field, with its visible error (if any) in the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            let cursor = Span::styled(cursor, Style::default().fg(Color::Cyan));
            match lines.last_mut() {
                Some(last) if !display_str.ends_with('\n') => last.spans.push(cursor),
                _ => lines.push(Line::from(cursor)),
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a dim line of key hints below a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
