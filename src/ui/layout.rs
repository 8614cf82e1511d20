//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::{App, SECTIONS};
use crate::platform::SAVE_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Sidebar label for a section
fn section_label(view: View) -> &'static str {
    match view {
        View::Users => "Users",
        View::Orders => "Orders",
        View::Legal => "Legal",
        View::Catalog => "Catalog",
        _ => "",
    }
}

/// Section a view belongs to, for sidebar highlighting
fn owning_section(view: View) -> View {
    match view {
        View::UserCreate | View::UserEdit => View::Users,
        View::LegalEdit => View::Legal,
        View::Upload => View::Catalog,
        other => other,
    }
}

fn section_count(app: &App, view: View) -> Option<usize> {
    match view {
        View::Users => Some(app.state.users.len()),
        View::Orders => Some(app.state.orders.len()),
        View::Legal => Some(app.state.legal_documents.len()),
        View::Catalog => Some(app.state.catalog.len()),
        _ => None,
    }
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(SECTIONS.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let active = owning_section(app.state.current_view);
    // Sections are locked while a form is open
    let in_form = app.state.current_view.is_form();

    for (idx, view) in SECTIONS.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &(idx + 1).to_string(),
            section_label(*view),
            section_count(app, *view),
            *view == active,
            !in_form || *view == active,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.backend_reachable {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    let hints = if app.state.editing_search {
        "type to search  Enter:apply  Esc:done".to_string()
    } else {
        get_view_hints(app.state.current_view, app.is_uploading())
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if app.notification.is_visible() && !app.state.current_view.is_form() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("x:dismiss", Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, uploading: bool) -> String {
    match view {
        View::Users => "1-4:section  j/k:nav  n:new  e:edit  d:delete  r:refresh".to_string(),
        View::Orders => "1-4:section  j/k:nav  s:status  c:cancel  r:refresh".to_string(),
        View::Legal => "1-4:section  j/k:nav  e:edit  r:refresh".to_string(),
        View::Catalog => {
            "1-4:section  j/k:nav  /:search  c:category  p:price  u:upload".to_string()
        }
        View::Upload if uploading => "Esc:cancel upload".to_string(),
        View::UserCreate | View::UserEdit | View::LegalEdit | View::Upload => {
            format!("Tab:next  Space:toggle  {SAVE_SHORTCUT}:save  Esc:cancel")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_views_belong_to_their_section() {
        assert_eq!(owning_section(View::UserEdit), View::Users);
        assert_eq!(owning_section(View::Upload), View::Catalog);
        assert_eq!(owning_section(View::Orders), View::Orders);
    }

    #[test]
    fn test_upload_hint_changes_while_uploading() {
        assert_eq!(get_view_hints(View::Upload, true), "Esc:cancel upload");
        assert!(get_view_hints(View::Upload, false).contains("save"));
    }
}
