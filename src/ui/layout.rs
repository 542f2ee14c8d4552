//! Screen layout, header and footer

use super::theme::Palette;
use crate::app::App;
use crate::state::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, body and footer areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let theme_tag = match app.state.theme {
        Theme::Light => "☀ light",
        Theme::Dark => "☾ dark",
    };
    let title = Line::from(vec![
        Span::styled(
            "Get In Touch",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(theme_tag, Style::default().fg(palette.muted)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center).block(block),
        area,
    );
}

pub fn draw_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(palette.accent)),
        Span::styled(" next field  ", Style::default().fg(palette.muted)),
        Span::styled("Enter", Style::default().fg(palette.accent)),
        Span::styled(" send  ", Style::default().fg(palette.muted)),
        Span::styled("Ctrl+T", Style::default().fg(palette.accent)),
        Span::styled(" theme  ", Style::default().fg(palette.muted)),
        Span::styled("Esc", Style::default().fg(palette.accent)),
        Span::styled(" quit", Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
