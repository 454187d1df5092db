//! Theme registry and loader

mod dracula;
mod gruvbox;
mod nord;

use driftdeck_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let mut apply = |slot: &mut Color, value: &Option<String>| {
        if let Some(hex) = value {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color override '{}', keeping theme default", hex),
            }
        }
    };

    apply(&mut theme.bg0, &overrides.bg0);
    apply(&mut theme.bg1, &overrides.bg1);
    apply(&mut theme.fg0, &overrides.fg0);
    apply(&mut theme.fg1, &overrides.fg1);
    apply(&mut theme.accent, &overrides.accent);
    apply(&mut theme.dim, &overrides.dim);
    apply(&mut theme.error, &overrides.error);

    theme
}
