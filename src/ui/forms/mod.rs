//! Form rendering module
//!
//! - `field_renderer`: single field boxes with inline errors
//! - `draw_form`: the user and legal document editors
//! - `draw_upload`: the catalog image upload screen

mod field_renderer;

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::forms::{Form, FormController, FormState, SubmissionStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use field_renderer::{draw_field, draw_help_text, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draw the active record form (user or legal document)
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App, title: &str) {
    let Some(controller) = app.state.form.controller() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if controller.banner().is_some() { 3 } else { 0 };
    let mut constraints = vec![Constraint::Length(banner_height)];
    constraints.extend(
        controller
            .fields()
            .iter()
            .map(|f| Constraint::Length(field_height(f))),
    );
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    if let Some(banner) = controller.banner() {
        draw_banner(frame, chunks[0], banner);
    }

    let active = controller.active_field();
    for (i, field) in controller.fields().iter().enumerate() {
        draw_field(
            frame,
            chunks[i + 1],
            field,
            i == active,
            controller.visible_error(&field.name),
        );
    }

    let button_row = controller.fields().len() + 1;
    let busy = controller.status() == SubmissionStatus::Submitting;
    let label = if busy { "Saving..." } else { "Save" };
    draw_submit_button(frame, chunks[button_row], controller, label, busy);

    let multiline_hint = if app.state.form.is_active_field_multiline() {
        "Enter: newline  "
    } else {
        ""
    };
    draw_help_text(
        frame,
        chunks[button_row + 1],
        &format!("Tab: next field  {multiline_hint}{SAVE_SHORTCUT}: save  Esc: back"),
    );
}

/// Draw the catalog image upload form with its progress bar
pub fn draw_upload(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Upload(form) = &app.state.form else {
        return;
    };
    let controller = &form.controller;
    let progress = app.uploads.progress();
    let uploading = app.is_uploading();

    let block = Block::default()
        .title(" Upload Catalog Image ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Path
            Constraint::Length(3),             // Progress
            Constraint::Length(1),             // Error
            Constraint::Length(BUTTON_HEIGHT), // Button
            Constraint::Length(1),             // Help
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    if let Some(field) = controller.fields().first() {
        draw_field(
            frame,
            chunks[0],
            field,
            controller.active_field() == 0 && !uploading,
            controller.visible_error(&field.name),
        );
    }

    let gauge_color = if progress.error.is_some() {
        Color::Red
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
        .percent(u16::from(progress.percent.min(100)));
    frame.render_widget(gauge, chunks[1]);

    if let Some(error) = &progress.error {
        let line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, chunks[2]);
    }

    let label = if uploading { "Uploading..." } else { "Upload" };
    draw_submit_button(frame, chunks[3], controller, label, uploading);

    let help = if uploading {
        "Esc: cancel upload"
    } else {
        "Enter on Upload: start  Esc: back"
    };
    draw_help_text(frame, chunks[4], help);
}

fn draw_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn draw_submit_button(
    frame: &mut Frame,
    area: Rect,
    controller: &FormController,
    label: &str,
    busy: bool,
) {
    let width = (label.chars().count() as u16 + 4).min(area.width);
    let button_area = Rect { width, ..area };
    render_button(
        frame,
        button_area,
        label,
        controller.is_buttons_row_active(),
        !busy && !controller.submit_disabled(),
    );
}
