//! Theme palettes for light and dark rendering

use crate::state::Theme;
use ratatui::style::Color;

/// Colors used by all draw code, keyed off the active theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            fg: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Blue,
            border: Color::DarkGray,
            error: Color::Red,
        },
        Theme::Dark => Palette {
            fg: Color::White,
            muted: Color::Gray,
            accent: Color::Cyan,
            border: Color::Gray,
            error: Color::LightRed,
        },
    }
}
