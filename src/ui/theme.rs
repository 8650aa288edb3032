use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf5, 0xc5, 0x18);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const RATING: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HIGHLIGHT_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
