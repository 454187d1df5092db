use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xe6, 0xe6, 0xe0),
        dim: Color::Rgb(0x62, 0x72, 0xa4),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
        error: Color::Rgb(0xff, 0x55, 0x55),
        slide_palette: [
            Color::Rgb(0x34, 0x37, 0x46),
            Color::Rgb(0x3d, 0x41, 0x52),
            Color::Rgb(0x44, 0x47, 0x5a),
            Color::Rgb(0x2f, 0x33, 0x40),
            Color::Rgb(0x39, 0x3c, 0x4b),
        ],
    }
}
