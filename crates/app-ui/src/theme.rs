//! Color palettes and theme provider for AR Book Explorer
//!
//! Two themes are supported. Light is the default used by the prototype's
//! screens. Dark mirrors it for low-light camera use.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let bg_color = &theme.colors.background;
//! let primary = &theme.colors.primary;
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g. "#FFFFFF") or an rgba() literal
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Build an rgba() literal from a hex color and an alpha channel
pub fn with_alpha(hex: &str, alpha: f32) -> Option<Color> {
    let (r, g, b) = parse_hex_color(hex)?;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0)))
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Brand colors for the book explorer
pub mod brand {
    /// Primary indigo
    pub const PRIMARY: &str = "#4F46E5";
    /// Pressed/darker indigo
    pub const PRIMARY_DARK: &str = "#4338CA";
    /// Secondary violet
    pub const SECONDARY: &str = "#7C3AED";
    /// Success green (achievements, correct answers)
    pub const SUCCESS: &str = "#10B981";
    /// Danger red (errors, destructive actions)
    pub const DANGER: &str = "#EF4444";
    /// Warning amber
    pub const WARNING: &str = "#F59E0B";
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors consumed by the foundation components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Raised surfaces (cards, modals)
    pub surface: Color,
    /// Muted surfaces (filled inputs, filled cards)
    pub surface_muted: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (helper text, subtitles)
    pub text_muted: Color,
    /// Placeholder text
    pub placeholder: Color,
    /// Default border
    pub border: Color,
    /// Primary action color
    pub primary: Color,
    /// Primary action color while pressed
    pub primary_pressed: Color,
    /// Text drawn on top of primary
    pub on_primary: Color,
    /// Secondary action color
    pub secondary: Color,
    /// Success color
    pub success: Color,
    /// Error/danger color
    pub danger: Color,
    /// Overlay backdrop
    pub backdrop: Color,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: "#F9FAFB".to_string(),
            surface: brand::WHITE.to_string(),
            surface_muted: "#F3F4F6".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6B7280".to_string(),
            placeholder: "#9CA3AF".to_string(),
            border: "#D1D5DB".to_string(),
            primary: brand::PRIMARY.to_string(),
            primary_pressed: brand::PRIMARY_DARK.to_string(),
            on_primary: brand::WHITE.to_string(),
            secondary: brand::SECONDARY.to_string(),
            success: brand::SUCCESS.to_string(),
            danger: brand::DANGER.to_string(),
            backdrop: "rgba(0, 0, 0, 0.5)".to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: "#0B0F19".to_string(),
            surface: "#161B26".to_string(),
            surface_muted: "#1F2532".to_string(),
            text: "#F9FAFB".to_string(),
            text_muted: "#9CA3AF".to_string(),
            placeholder: "#6B7280".to_string(),
            border: "#374151".to_string(),
            primary: "#6366F1".to_string(),
            primary_pressed: brand::PRIMARY.to_string(),
            on_primary: brand::WHITE.to_string(),
            secondary: "#8B5CF6".to_string(),
            success: "#34D399".to_string(),
            danger: "#F87171".to_string(),
            backdrop: "rgba(0, 0, 0, 0.7)".to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Get all available themes
pub fn all_themes() -> HashMap<ThemeName, Theme> {
    let mut themes = HashMap::new();
    themes.insert(ThemeName::Light, light_theme());
    themes.insert(ThemeName::Dark, dark_theme());
    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("4F46E5"), Some((79, 70, 229)));
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(
            with_alpha("#000000", 0.5),
            Some("rgba(0, 0, 0, 0.5)".to_string())
        );
        assert_eq!(with_alpha("nope", 0.5), None);
    }

    #[test]
    fn test_theme_name_parse_and_display() {
        assert_eq!("dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert_eq!("LIGHT".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert!("sepia".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
        assert_eq!(ThemeName::Light.color_scheme(), "light");
    }

    #[test]
    fn test_get_theme() {
        assert!(!get_theme(ThemeName::Light).is_dark());
        assert!(get_theme(ThemeName::Dark).is_dark());
        assert_eq!(all_themes().len(), 2);
    }

    #[test]
    fn test_themes_differ_on_background() {
        assert_ne!(light_theme().colors.background, dark_theme().colors.background);
    }

    #[test]
    fn test_theme_name_serialization() {
        let json = serde_json::to_string(&ThemeName::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
