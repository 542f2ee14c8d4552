//! UI module for rendering the TUI

mod form;
mod layout;
mod notification;
mod review;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = theme::palette(app.state.theme);

    let (header_area, body_area, footer_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app, &palette);
    layout::draw_footer(frame, footer_area, &palette);

    // Form on top, review panel (when present) appended beneath it
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form::FORM_HEIGHT), Constraint::Min(0)])
        .split(body_area);
    form::draw(frame, body[0], app, &palette);
    if let Some(ref panel) = app.state.review {
        review::draw(frame, body[1], panel, &palette);
    }

    // Toast overlay renders last so it sits above everything else
    if let Some(ref current) = app.state.notification {
        notification::draw(frame, area, current);
    }
}
