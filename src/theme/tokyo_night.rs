//! Tokyo Night palette

use ratatui::style::Color;

use super::Theme;

impl Theme {
    /// Dark blue palette, the default
    pub fn tokyo_night() -> Self {
        Self {
            name: "Tokyo Night".to_string(),
            bg_primary: Color::Rgb(0x1a, 0x1b, 0x26),
            bg_secondary: Color::Rgb(0x24, 0x28, 0x3b),
            bg_tertiary: Color::Rgb(0x41, 0x48, 0x68),
            fg_primary: Color::Rgb(0xa9, 0xb1, 0xd6),
            fg_secondary: Color::Rgb(0xc0, 0xca, 0xf5),
            fg_muted: Color::Rgb(0x56, 0x5f, 0x89),
            accent_primary: Color::Rgb(0x7a, 0xa2, 0xf7),
            accent_secondary: Color::Rgb(0xbb, 0x9a, 0xf7),
            success: Color::Rgb(0x9e, 0xce, 0x6a),
            warning: Color::Rgb(0xe0, 0xaf, 0x68),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
            info: Color::Rgb(0x7d, 0xcf, 0xff),
            // Star shares the warning amber
            favorite: Color::Rgb(0xe0, 0xaf, 0x68),
            mask: Color::Rgb(0x29, 0x2e, 0x42),
            border_focused: Color::Rgb(0x7a, 0xa2, 0xf7),
            cursor: Color::Rgb(0xc0, 0xca, 0xf5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_named() {
        assert_eq!(Theme::tokyo_night().name, "Tokyo Night");
    }

    #[test]
    fn hidden_side_mask_differs_from_panel_background() {
        let theme = Theme::tokyo_night();
        assert_ne!(theme.mask, theme.bg_secondary);
        assert!(matches!(theme.favorite, Color::Rgb(0xe0, 0xaf, 0x68)));
    }
}
