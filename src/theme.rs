// Color themes
// The config names a theme; drawing code only ever sees the resolved palette

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    /// No colors beyond the terminal's own foreground
    Mono,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub highlight_bg: Color,
    pub submenu: Color,
    pub muted: Color,
    pub ok: Color,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Default => Palette {
                accent: Color::Cyan,
                highlight_bg: Color::DarkGray,
                submenu: Color::Yellow,
                muted: Color::Gray,
                ok: Color::Green,
            },
            Theme::Mono => Palette {
                accent: Color::Reset,
                highlight_bg: Color::Reset,
                submenu: Color::Reset,
                muted: Color::Reset,
                ok: Color::Reset,
            },
        }
    }
}
