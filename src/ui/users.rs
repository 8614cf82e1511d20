//! User accounts list

use super::{list_block, render_record_list};
use crate::app::App;
use crate::state::Role;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => Color::Magenta,
        Role::Planner => Color::Yellow,
        Role::Customer => Color::Blue,
    }
}

/// Draw the users list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let users = &app.state.users;
    let rows: Vec<ListItem> = users
        .iter()
        .map(|user| {
            let status = if user.is_active {
                Span::styled("●", Style::default().fg(Color::Green))
            } else {
                Span::styled("○", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(Line::from(vec![
                status,
                Span::raw(" "),
                Span::styled(format!("{:<24}", user.name), Style::default().fg(Color::White)),
                Span::styled(format!("{:<32}", user.email), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:<10}", user.role.label()),
                    Style::default().fg(role_color(user.role)),
                ),
                Span::styled(
                    user.phone.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    render_record_list(
        frame,
        area,
        list_block("Users", users.len()),
        rows,
        app.state.selected_index,
        "No users found.\nPress 'n' to create a new user.",
    );
}
