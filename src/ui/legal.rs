//! Legal documents list with a preview of the selected one

use super::{list_block, render_record_list};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the legal documents list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let documents = &app.state.legal_documents;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(documents.len().max(1) as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let rows: Vec<ListItem> = documents
        .iter()
        .map(|doc| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<32}", doc.title), Style::default().fg(Color::White)),
                Span::styled(
                    format!("updated {}", doc.updated_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    render_record_list(
        frame,
        chunks[0],
        list_block("Legal", documents.len()),
        rows,
        app.state.selected_index,
        "No legal documents.",
    );

    if let Some(doc) = app.state.selected_legal_document() {
        let preview = Paragraph::new(doc.content.as_str())
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .title(format!(" /{} ", doc.slug))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(preview, chunks[1]);
    }
}
