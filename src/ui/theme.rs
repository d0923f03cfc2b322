use ratatui::style::Color;

use crate::catalog::ColorTag;

pub const ACCENT: Color = Color::Rgb(0x8b, 0x7c, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const CUSTOM_BADGE: Color = Color::Rgb(0xfa, 0xcc, 0x15);

/// Border/accent color for a deck's color tag.
pub fn deck_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
        ColorTag::Purple => Color::Rgb(0x76, 0x4b, 0xa2),
        ColorTag::Green => Color::Rgb(0x22, 0xc5, 0x5e),
        ColorTag::Red => Color::Rgb(0xf5, 0x57, 0x6c),
        ColorTag::Orange => Color::Rgb(0xf9, 0x73, 0x16),
        ColorTag::Pink => Color::Rgb(0xf0, 0x93, 0xfb),
    }
}
