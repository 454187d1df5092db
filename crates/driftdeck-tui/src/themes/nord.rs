use ratatui::style::Color;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40),
        bg1: Color::Rgb(0x3b, 0x42, 0x52),
        fg0: Color::Rgb(0xec, 0xef, 0xf4),
        fg1: Color::Rgb(0xd8, 0xde, 0xe9),
        dim: Color::Rgb(0x4c, 0x56, 0x6a),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        error: Color::Rgb(0xbf, 0x61, 0x6a),
        slide_palette: [
            Color::Rgb(0x3b, 0x42, 0x52),
            Color::Rgb(0x43, 0x4c, 0x5e),
            Color::Rgb(0x4c, 0x56, 0x6a),
            Color::Rgb(0x40, 0x4a, 0x5c),
            Color::Rgb(0x37, 0x3e, 0x4d),
        ],
    }
}
