use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf4, 0xa2, 0x26);
pub const BANNER_BG: Color = Color::Rgb(0x5b, 0x3b, 0x1e);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xf4, 0xa2, 0x26);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PACKED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DANGER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
