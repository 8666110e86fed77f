use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf4, 0x72, 0xb6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const LIKE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DISLIKE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
