use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::Category;

/// Persisted light/dark preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `dark` is light.
    pub fn from_stored(s: &str) -> ThemeMode {
        if s.trim() == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Glyph for the toggle control: offers the sun while dark, the moon while light
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "\u{263E}",
            ThemeMode::Dark => "\u{2600}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("unknown theme '{}' (expected light, dark)", s)),
        }
    }
}

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Category preselected when adding a task
    #[serde(default)]
    pub default_category: Category,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides per palette
    #[serde(default)]
    pub colors: PaletteOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_category: Category::General,
            show_key_hints: true,
            colors: PaletteOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteOverrides {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl PaletteOverrides {
    pub fn for_mode(&self, mode: ThemeMode) -> &HashMap<String, String> {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_stored_defaults_to_light() {
        assert_eq!(ThemeMode::from_stored("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(""), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("solarized"), ThemeMode::Light);
    }

    #[test]
    fn theme_toggle_and_icon() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.icon(), "\u{2600}");
        assert_eq!(ThemeMode::Light.icon(), "\u{263E}");
    }

    #[test]
    fn config_defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.default_category, Category::General);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.light.is_empty());
    }

    #[test]
    fn config_parses_overrides() {
        let config: Config = toml::from_str(
            r##"
[ui]
default_category = "study"
show_key_hints = false

[ui.colors.dark]
background = "#101010"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.default_category, Category::Study);
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.for_mode(ThemeMode::Dark).get("background"),
            Some(&"#101010".to_string())
        );
        assert!(config.ui.colors.for_mode(ThemeMode::Light).is_empty());
    }
}
