//! Layout components (form column, status bar)

use crate::app::App;
use crate::state::{FormPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the form column
const FORM_WIDTH: u16 = 60;

/// Centered content column with the bottom line reserved for the
/// status bar
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    centered_column(chunks[0], FORM_WIDTH)
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the bottom status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Form phase indicator
    let (dot, color) = match app.state.phase {
        FormPhase::Clean => ("○", Color::Gray),
        FormPhase::Editing => ("●", Color::Yellow),
        FormPhase::SubmittedInvalid => ("●", Color::Red),
        FormPhase::SubmittedValid => ("●", Color::Green),
    };
    spans.push(Span::styled(format!(" {dot} "), Style::default().fg(color)));

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // How many fields the last submit rejected
    if app.state.phase == FormPhase::SubmittedInvalid {
        spans.push(Span::raw(" | "));
        let count = app.state.errors.len();
        let text = if count == 1 {
            "1 field needs attention".to_string()
        } else {
            format!("{count} fields need attention")
        };
        spans.push(Span::styled(text, Style::default().fg(Color::Red)));
    }

    // Transient feedback
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if status_area.width > hint_width {
        let hint_area = Rect {
            x: status_area.width - hint_width,
            y: status_area.y,
            width: hint_width,
            height: 1,
        };
        let hint = Paragraph::new(Line::from(Span::styled(
            quit_hint,
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        )));
        frame.render_widget(hint, hint_area);
    }
}

fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Register => "Tab: next field  Ctrl+S: submit  Esc: reset",
        View::Confirmation => "Enter: new registration  q: quit",
    }
}
