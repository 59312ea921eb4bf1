use ratatui::style::Color;

pub const BRAND_ORANGE: Color = Color::Rgb(0xff, 0x66, 0x00);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x82, 0x82, 0x82);
pub const LINK: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HINT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const SELECTED: Color = Color::Rgb(0x26, 0x26, 0x26);
