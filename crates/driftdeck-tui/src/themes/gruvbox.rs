use ratatui::style::Color;

use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme::default()
}

pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf2, 0xe5, 0xbc),
        fg0: Color::Rgb(0x3c, 0x38, 0x36),
        fg1: Color::Rgb(0x50, 0x49, 0x45),
        dim: Color::Rgb(0xa8, 0x99, 0x84),
        accent: Color::Rgb(0x42, 0x7b, 0x58),
        error: Color::Rgb(0xcc, 0x24, 0x1d),
        slide_palette: [
            Color::Rgb(0xd5, 0xc4, 0xa1),
            Color::Rgb(0xbd, 0xae, 0x93),
            Color::Rgb(0xeb, 0xdb, 0xb2),
            Color::Rgb(0xd6, 0xcc, 0xa9),
            Color::Rgb(0xc9, 0xb9, 0x9a),
        ],
    }
}
