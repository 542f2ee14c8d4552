//! Contact form rendering: fields, inline errors and the submit row

use super::theme::Palette;
use crate::app::App;
use crate::state::{FormField, SubmitStatus, FIELD_COUNT, SUBMIT_ROW};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Row heights: bordered input plus one line for the inline error
const FIELD_HEIGHT: u16 = 4;
const MESSAGE_HEIGHT: u16 = 7;
const SUBMIT_HEIGHT: u16 = 3;

/// Total height the form needs, exposed for layout
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * 3 + MESSAGE_HEIGHT + SUBMIT_HEIGHT;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(SUBMIT_HEIGHT),
        ])
        .split(area);

    let active = app.state.form.active_index();
    for index in 0..FIELD_COUNT {
        if let Some(field) = app.state.form.get_field(index) {
            draw_field(frame, chunks[index], field, index == active, palette);
        }
    }

    draw_submit_row(
        frame,
        chunks[SUBMIT_ROW],
        app.state.submit_status,
        active == SUBMIT_ROW,
        palette,
    );
}

/// Draw one bordered field with its error annotation line beneath it
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = if field.annotation().is_some() {
        Style::default().fg(palette.error)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let value_style = if is_active {
        Style::default().fg(palette.fg)
    } else {
        Style::default().fg(palette.muted)
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value()
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(palette.accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(palette.accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value().to_string(), value_style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = field.annotation() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.to_string(),
                Style::default().fg(palette.error),
            )),
            chunks[1],
        );
    }
}

/// Draw the submit control; disabled with a spinner label while sending
fn draw_submit_row(
    frame: &mut Frame,
    area: Rect,
    status: SubmitStatus,
    is_active: bool,
    palette: &Palette,
) {
    let (label, style) = match status {
        SubmitStatus::Idle => {
            let style = if is_active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            ("Send Message", style)
        }
        SubmitStatus::Sending => ("⠋ Sending...", Style::default().fg(palette.muted)),
    };

    let border_style = if is_active && status == SubmitStatus::Idle {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
