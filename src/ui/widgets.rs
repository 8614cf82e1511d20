//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Bordered block shared by the record lists
pub fn list_block(title: &str, count: usize) -> Block<'static> {
    Block::default()
        .title(format!(" {title} ({count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Render rows of a record list, or `empty_message` when there are none.
///
/// The selected row stays in view, so `j`/`k` past the visible window
/// scrolls instead of moving the highlight off-screen.
pub fn render_record_list<'a>(
    frame: &mut Frame,
    area: Rect,
    block: Block<'a>,
    rows: Vec<ListItem<'a>>,
    selected_index: usize,
    empty_message: &str,
) {
    if rows.is_empty() {
        let content = Paragraph::new(empty_message.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let list = List::new(rows).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
