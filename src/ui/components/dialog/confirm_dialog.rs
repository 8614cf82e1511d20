//! Confirmation dialog component for destructive actions

use super::base::{key_hints, render_dialog, DialogConfig};
use crate::state::PendingAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the confirmation dialog for a pending destructive action
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingAction) {
    let message = format!(
        "Are you sure you want to {} {}?",
        action.verb(),
        action.entity_display
    );

    render_dialog(
        frame,
        DialogConfig {
            title: action.title(),
            accent: Color::Red,
            message: &message,
            footer: vec![
                option_row(action),
                Line::from(""),
                key_hints(&[("←→", "select"), ("Enter", "confirm"), ("Esc", "back")]),
            ],
            max_width: 56,
        },
    );
}

/// "Cancel" first and selected by default; the destructive option in red
fn option_row(action: &PendingAction) -> Line<'static> {
    let confirm_label = capitalize(action.verb());
    let options = [
        (false, "Keep".to_string(), Color::White),
        (true, confirm_label, Color::Red),
    ];

    let mut spans = Vec::new();
    for (value, label, color) in options {
        let selected = action.selected_option == value;
        let style = if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PendingKind;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("delete"), "Delete");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_option_row_highlights_selection() {
        let mut action = PendingAction::new(PendingKind::CancelOrder { id: 1 }, "ORD-1");
        let row = option_row(&action);
        assert!(row.spans[0].style.add_modifier.contains(Modifier::REVERSED));
        action.selected_option = true;
        let row = option_row(&action);
        assert_eq!(row.spans[2].content, " Cancel ");
        assert!(row.spans[2].style.add_modifier.contains(Modifier::REVERSED));
    }
}
