//! The registration form view

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_error, draw_field};
use crate::app::App;
use crate::schema::FieldId;
use crate::state::{BUTTONS, BUTTONS_ROW};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    // One box per field, its error message on the line beneath
    let mut constraints = Vec::new();
    for id in FieldId::ALL {
        constraints.push(Constraint::Length(3));
        if app.state.error_for(id).is_some() {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if app.config.show_help_bar() {
        constraints.push(Constraint::Length(2));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let mut chunk = 0;
    for index in 0..BUTTONS_ROW {
        let Some(field) = app.state.form.field_at(index) else {
            break;
        };
        let is_active = app.state.form.active_field_index == index;
        draw_field(frame, chunks[chunk], field, is_active);
        chunk += 1;

        if let Some(message) = app.state.error_for(field.id) {
            draw_error(frame, chunks[chunk], message);
            chunk += 1;
        }
    }

    draw_buttons(frame, chunks[chunk], app);
    chunk += 1;

    if app.config.show_help_bar() {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": toggle  "),
            Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
            Span::raw(": submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": reset"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[chunk]);
    }
}

/// Draw the Clear/Submit row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let on_buttons = app.state.form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (index, label) in BUTTONS.iter().enumerate() {
        let is_selected = on_buttons && app.state.form.selected_button == index;
        render_button(frame, chunks[index], label, is_selected);
    }
}
