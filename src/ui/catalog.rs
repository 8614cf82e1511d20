//! Service catalog with search and filters

use super::{list_block, render_record_list};
use crate::app::App;
use crate::state::format_cents;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

/// Draw the catalog list with its filter bar
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_filter_bar(frame, chunks[0], app);

    let items = app.state.filtered_catalog();
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let image = match &item.image_path {
                Some(path) => Span::styled(path.clone(), Style::default().fg(Color::DarkGray)),
                None => Span::styled("no image", Style::default().fg(Color::Red)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<28}", item.name), Style::default().fg(Color::White)),
                Span::styled(format!("{:<14}", item.category), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:>12}  ", format_cents(item.price_cents)),
                    Style::default().fg(Color::Green),
                ),
                image,
            ]))
        })
        .collect();

    render_record_list(
        frame,
        chunks[1],
        list_block("Catalog", items.len()),
        rows,
        app.state.selected_index,
        "No catalog items match the current filter.",
    );
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let filter = &app.state.catalog_filter;
    let editing = app.state.editing_search;

    let search = if filter.search.is_empty() && !editing {
        Span::styled("(any)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(filter.search.clone(), Style::default().fg(Color::White))
    };
    let cursor = if editing { "▌" } else { "" };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Cyan)),
        search,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
        Span::styled("   Category: ", Style::default().fg(Color::Cyan)),
        Span::raw(filter.category.clone().unwrap_or_else(|| "all".to_string())),
        Span::styled("   Max price: ", Style::default().fg(Color::Cyan)),
        Span::raw(
            filter
                .max_price_cents
                .map(format_cents)
                .unwrap_or_else(|| "any".to_string()),
        ),
    ]);

    let border = if editing { Color::Cyan } else { Color::DarkGray };
    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(bar, area);
}
