//! Theming system for Flashdeck

mod tokyo_night;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Card elements
    pub favorite: Color,
    pub mask: Color,

    // UI elements
    pub border_focused: Color,
    pub cursor: Color,
}

impl Theme {
    /// Look up a built-in theme, falling back to Tokyo Night
    pub fn by_name(name: &str) -> Self {
        match name {
            "Tokyo Night" => Theme::tokyo_night(),
            other => {
                tracing::warn!("Unknown theme {:?}, using Tokyo Night", other);
                Theme::tokyo_night()
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}
