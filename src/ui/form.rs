//! Registration form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::engine::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Width reserved for the status column next to each field
const STATUS_WIDTH: u16 = 34;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let border_type = super::border_type(app);

    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First Name
            Constraint::Length(3),             // Last Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Date of Birth
            Constraint::Length(3),             // Zip Code
            Constraint::Length(BUTTON_HEIGHT), // Register button
            Constraint::Min(0),                // remaining space
        ])
        .margin(1)
        .split(inner);

    for id in FieldId::ALL {
        draw_field_row(frame, chunks[id.index()], app, id, border_type);
    }

    let button_area = Rect {
        width: chunks[5].width.min(16),
        ..chunks[5]
    };
    render_button(
        frame,
        button_area,
        "Register",
        app.screen.is_register_focused(),
        app.screen.submit_enabled,
        border_type,
    );
}

/// Draw one field with its status column
fn draw_field_row(frame: &mut Frame, area: Rect, app: &App, id: FieldId, border_type: BorderType) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(24),              // Field
            Constraint::Length(STATUS_WIDTH), // Status
        ])
        .split(area);

    let is_active = app.screen.focused_field() == Some(id);
    draw_field(frame, row[0], id.label(), app.screen.buffer(id), is_active, border_type);
    draw_status(frame, row[1], app, id);
}

/// Draw a single-line bordered field with a cursor when active
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    border_type: BorderType,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw a field's status text: green checkmark, red invalid hint,
/// or nothing for a field that has never been validated
fn draw_status(frame: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let Some(status) = app.screen.status(id) else {
        return;
    };
    if area.height < 3 {
        return;
    }

    let style = if status.is_valid {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    // Align with the field's content line inside its borders
    let line_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let paragraph = Paragraph::new(Span::styled(status.display_text.as_str(), style));
    frame.render_widget(paragraph, line_area);
}
