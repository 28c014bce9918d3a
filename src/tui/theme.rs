use ratatui::style::Color;

use crate::model::{Category, ThemeMode, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    /// Panels: header, filter bar, empty state
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xF7, 0xF7, 0xFB),
            surface: Color::Rgb(0xEC, 0xEC, 0xF4),
            text: Color::Rgb(0x3A, 0x3A, 0x4A),
            text_bright: Color::Rgb(0x11, 0x11, 0x1B),
            highlight: Color::Rgb(0x66, 0x7E, 0xEA),
            dim: Color::Rgb(0x8A, 0x8A, 0x9E),
            red: Color::Rgb(0xD9, 0x3B, 0x3B),
            yellow: Color::Rgb(0xB5, 0x83, 0x00),
            green: Color::Rgb(0x2E, 0x9E, 0x5B),
            blue: Color::Rgb(0x2F, 0x6F, 0xD6),
            purple: Color::Rgb(0x76, 0x4B, 0xA2),
            cyan: Color::Rgb(0x1C, 0x8A, 0x9E),
            selection_bg: Color::Rgb(0xDD, 0xE2, 0xFB),
            search_match_bg: Color::Rgb(0xFF, 0xE0, 0x66),
            search_match_fg: Color::Rgb(0x11, 0x11, 0x1B),
        }
    }

    pub fn dark() -> Self {
        Theme {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x1A, 0x1A, 0x2E),
            surface: Color::Rgb(0x24, 0x24, 0x3E),
            text: Color::Rgb(0xC8, 0xC8, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x8B, 0x9B, 0xF5),
            dim: Color::Rgb(0x7D, 0x78, 0xA0),
            red: Color::Rgb(0xFF, 0x5C, 0x5C),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xE0, 0x88),
            blue: Color::Rgb(0x44, 0x88, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0x33, 0x33, 0x5C),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x1A, 0x1A, 0x2E),
        }
    }

    /// Palette for `mode` with overrides from `[ui.colors.<mode>]` applied.
    /// Unknown slots and malformed colors are ignored.
    pub fn for_mode(mode: ThemeMode, ui: &UiConfig) -> Self {
        let mut theme = match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        };

        for (key, value) in ui.colors.for_mode(mode) {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "surface" => theme.surface = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "blue" => theme.blue = color,
                    "purple" => theme.purple = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Accent color for a category badge
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Work => self.blue,
            Category::Personal => self.purple,
            Category::Study => self.cyan,
            Category::General => self.dim,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(
            parse_hex_color("#1a1a2e"),
            Some(Color::Rgb(0x1A, 0x1A, 0x2E))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::light().background, Theme::dark().background);
        assert_eq!(Theme::light().mode, ThemeMode::Light);
        assert_eq!(Theme::dark().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_for_mode_applies_only_matching_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.dark.insert("background".into(), "#000000".into());
        ui.colors.light.insert("text".into(), "#123456".into());
        ui.colors.dark.insert("nonsense".into(), "#FFFFFF".into());
        ui.colors.dark.insert("highlight".into(), "pink".into());

        let dark = Theme::for_mode(ThemeMode::Dark, &ui);
        assert_eq!(dark.background, Color::Rgb(0, 0, 0));
        assert_eq!(dark.text, Theme::dark().text);
        assert_eq!(dark.highlight, Theme::dark().highlight);

        let light = Theme::for_mode(ThemeMode::Light, &ui);
        assert_eq!(light.text, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(light.background, Theme::light().background);
    }

    #[test]
    fn test_category_color() {
        let theme = Theme::dark();
        assert_eq!(theme.category_color(Category::Work), theme.blue);
        assert_eq!(theme.category_color(Category::General), theme.dim);
    }
}
