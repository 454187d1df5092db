use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Deck file opened when none is given on the command line
    #[serde(default)]
    pub default_deck: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_deck: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition is playing
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Show the slide navigation bar
    #[serde(default = "default_true")]
    pub show_nav_bar: bool,
    /// Show the status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            show_nav_bar: default_true(),
            show_status_bar: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord", "dracula")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (panels, bars)
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Accent color (active nav cell, focused heading)
    pub accent: Option<String>,
    /// Dimmed text (inactive nav cells, hints)
    pub dim: Option<String>,
    /// Error color
    pub error: Option<String>,
}

/// Easing curve selector, shared between config and the transition engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    Linear,
    /// Quadratic ease-out
    Power2Out,
    CubicOut,
    QuintOut,
    /// Fast-slow-fast curve with a long plateau in the middle
    SlowInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Panel wipe / parallax duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing for the panel wipe and parallax
    #[serde(default = "default_ease")]
    pub ease: EasingKind,
    /// Heading reveal duration in milliseconds
    #[serde(default = "default_heading_reveal_ms")]
    pub heading_reveal_ms: u64,
    /// Easing for per-character heading reveal
    #[serde(default = "default_heading_ease")]
    pub heading_ease: EasingKind,
    /// Delay between characters of the heading reveal, in milliseconds
    #[serde(default = "default_char_stagger_ms")]
    pub char_stagger_ms: u64,
    /// Background parallax offset as a percentage of the slide height
    #[serde(default = "default_parallax_percent")]
    pub parallax_percent: f64,
    /// Minimum time between accepted scroll-wheel events, in milliseconds
    #[serde(default = "default_wheel_debounce_ms")]
    pub wheel_debounce_ms: u64,
    /// Minimum vertical drag distance (rows) before a swipe registers
    #[serde(default = "default_swipe_dead_zone")]
    pub swipe_dead_zone: u16,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            ease: default_ease(),
            heading_reveal_ms: default_heading_reveal_ms(),
            heading_ease: default_heading_ease(),
            char_stagger_ms: default_char_stagger_ms(),
            parallax_percent: default_parallax_percent(),
            wheel_debounce_ms: default_wheel_debounce_ms(),
            swipe_dead_zone: default_swipe_dead_zone(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<CR>" (Enter), "<Esc>", "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next slide
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    /// Go back to the previous slide
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,
    /// Jump to the first slide
    #[serde(default = "default_key_first_slide")]
    pub first_slide: String,
    /// Jump to the last slide
    #[serde(default = "default_key_last_slide")]
    pub last_slide: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_slide: default_key_next_slide(),
            prev_slide: default_key_prev_slide(),
            first_slide: default_key_first_slide(),
            last_slide: default_key_last_slide(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String {
    "q".to_string()
}
fn default_key_next_slide() -> String {
    "j".to_string()
}
fn default_key_prev_slide() -> String {
    "k".to_string()
}
fn default_key_first_slide() -> String {
    "gg".to_string()
}
fn default_key_last_slide() -> String {
    "G".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_duration_ms() -> u64 {
    1300
}

fn default_ease() -> EasingKind {
    EasingKind::SlowInOut
}

fn default_heading_reveal_ms() -> u64 {
    900
}

fn default_heading_ease() -> EasingKind {
    EasingKind::Power2Out
}

fn default_char_stagger_ms() -> u64 {
    20
}

fn default_parallax_percent() -> f64 {
    15.0
}

fn default_wheel_debounce_ms() -> u64 {
    500
}

fn default_swipe_dead_zone() -> u16 {
    10
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/driftdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("driftdeck")
            .join("config.toml")
    }

    /// Get the default deck path (with tilde expansion), if configured
    pub fn default_deck(&self) -> Option<PathBuf> {
        self.general.default_deck.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.transition.duration_ms, 1300);
        assert_eq!(config.transition.ease, EasingKind::SlowInOut);
        assert_eq!(config.transition.char_stagger_ms, 20);
        assert!((config.transition.parallax_percent - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.transition.wheel_debounce_ms, 500);
        assert_eq!(config.transition.swipe_dead_zone, 10);
        assert_eq!(config.keymap.next_slide, "j");
    }

    #[test]
    fn test_partial_transition_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [transition]
            duration_ms = 800
            ease = "cubic-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.transition.duration_ms, 800);
        assert_eq!(config.transition.ease, EasingKind::CubicOut);
        // untouched fields keep their defaults
        assert_eq!(config.transition.heading_reveal_ms, 900);
        assert_eq!(config.transition.wheel_debounce_ms, 500);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_map_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { accent = "#ff79c6" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff79c6"));
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.transition.duration_ms, config.transition.duration_ms);
        assert_eq!(back.keymap.first_slide, "gg");
    }
}
