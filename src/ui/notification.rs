//! Notification toast overlay, fixed to the top-right corner

use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 46;

/// Draw the notification over whatever is beneath it
pub fn draw(frame: &mut Frame, area: Rect, notification: &Notification) {
    let accent = notification.severity.accent();
    let text = format!("{} {}", notification.severity.icon(), notification.message);

    let width = (text.chars().count() as u16 + 4).min(MAX_WIDTH).min(area.width);
    let height = 3;
    if area.width < width || area.height < height + 1 {
        return;
    }
    let toast = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title_bottom(Line::from(" Ctrl+X close ").right_aligned());

    frame.render_widget(Clear, toast);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(accent))).block(block),
        toast,
    );
}
