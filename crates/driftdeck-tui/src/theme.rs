use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,

    // Semantic colors
    pub dim: Color,
    pub accent: Color,
    pub error: Color,

    /// Backgrounds cycled through for slides without an explicit color
    pub slide_palette: [Color; 5],
}

impl Theme {
    /// Background color for slide `index` when the deck does not set one
    pub fn slide_background(&self, index: usize) -> Color {
        self.slide_palette[index % self.slide_palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            dim: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            error: Color::Rgb(0xea, 0x69, 0x62),
            slide_palette: [
                Color::Rgb(0x3a, 0x51, 0x5c),
                Color::Rgb(0x5c, 0x3a, 0x41),
                Color::Rgb(0x41, 0x5c, 0x3a),
                Color::Rgb(0x55, 0x4a, 0x33),
                Color::Rgb(0x48, 0x3a, 0x5c),
            ],
        }
    }
}
