//! Orders (bookings) list

use super::{list_block, render_record_list};
use crate::app::App;
use crate::state::{format_cents, OrderStatus, PaymentStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Confirmed => Color::Cyan,
        OrderStatus::Completed => Color::Green,
        OrderStatus::Cancelled => Color::Red,
    }
}

fn payment_color(status: PaymentStatus) -> Color {
    match status {
        PaymentStatus::Paid => Color::Green,
        PaymentStatus::Unpaid => Color::Yellow,
        PaymentStatus::Refunded => Color::DarkGray,
    }
}

/// Draw the orders list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let orders = &app.state.orders;
    let rows: Vec<ListItem> = orders
        .iter()
        .map(|order| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", order.reference),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{} ", order.event_date.format("%Y-%m-%d")),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:<20}", order.customer_name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<20}", order.package_name),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>12} ", format_cents(order.total_cents)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<10}", order.status.label()),
                    Style::default().fg(status_color(order.status)),
                ),
                Span::styled(
                    order.payment_status.label(),
                    Style::default().fg(payment_color(order.payment_status)),
                ),
            ]))
        })
        .collect();

    render_record_list(
        frame,
        area,
        list_block("Orders", orders.len()),
        rows,
        app.state.selected_index,
        "No orders yet.",
    );
}
