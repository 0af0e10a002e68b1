//! Confirmation view shown after an accepted submission

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the post-submission summary
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Registration Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let label = Style::default().fg(Color::DarkGray);
    let values = app.state.form.values();

    let mut lines = vec![Line::from("")];

    if let Some(receipt) = &app.state.last_receipt {
        lines.push(Line::from(vec![
            Span::styled(" Receipt:  ", label),
            Span::styled(
                receipt.id.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" Received: ", label),
            Span::raw(receipt.received_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" Name:     ", label),
        Span::raw(values.name),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Email:    ", label),
        Span::raw(values.email.trim().to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Phone:    ", label),
        Span::raw(values.phone.trim().to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Address:  ", label),
        Span::raw(values.address),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Newsletter: ", label),
        Span::raw(if values.subscribe { "Yes" } else { "No" }),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press Enter to register another account, q to quit.",
        label,
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}
