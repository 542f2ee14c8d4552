//! Review panel rendering

use super::theme::Palette;
use crate::state::ReviewPanel;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the read-only echo of the last submitted message
pub fn draw(frame: &mut Frame, area: Rect, panel: &ReviewPanel, palette: &Palette) {
    let label_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(palette.fg);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", label_style),
            Span::styled(panel.name.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Email: ", label_style),
            Span::styled(panel.email.clone(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Subject: ", label_style),
            Span::styled(panel.subject.clone(), value_style),
        ]),
        Line::from(Span::styled("Message: ", label_style)),
    ];
    for message_line in panel.message.lines() {
        lines.push(Line::from(Span::styled(
            message_line.to_string(),
            value_style,
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("received {}", panel.received_at.format("%Y-%m-%d %H:%M UTC")),
        Style::default().fg(palette.muted),
    )));

    let block = Block::default()
        .title(" Message Received ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
