use std::fs;
use std::path::{Path, PathBuf};

use crate::io::store::atomic_write;
use crate::model::config::{Config, ThemeMode};
use crate::model::task::Category;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not parse config.toml: {0}")]
    EditParseError(#[from] toml_edit::TomlError),
    #[error("unknown config key '{0}'")]
    UnknownKey(String),
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// File name of the config inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Read config.toml from the data directory. A missing file yields defaults.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_path(data_dir);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(toml::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(ConfigError::ReadError { path, source: e }),
    }
}

/// Read the raw config document for round-trip-safe editing.
/// A missing file yields an empty document.
pub fn read_config_doc(data_dir: &Path) -> Result<toml_edit::DocumentMut, ConfigError> {
    let path = config_path(data_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    Ok(text.parse()?)
}

/// Write the config document back to disk, preserving formatting.
pub fn write_config_doc(data_dir: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    let path = config_path(data_dir);
    fs::create_dir_all(data_dir).map_err(|e| ConfigError::WriteError {
        path: data_dir.to_path_buf(),
        source: e,
    })?;
    atomic_write(&path, doc.to_string().as_bytes())
        .map_err(|e| ConfigError::WriteError { path, source: e })
}

/// Split a user-facing key into its path under `[ui]`.
/// Accepted: `default_category`, `show_key_hints`, `colors.<light|dark>.<slot>`.
fn key_path(key: &str) -> Result<Vec<String>, ConfigError> {
    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["default_category"] | ["show_key_hints"] => Ok(vec![parts[0].to_string()]),
        ["colors", mode, slot] if mode.parse::<ThemeMode>().is_ok() && !slot.is_empty() => Ok(
            vec!["colors".to_string(), mode.to_string(), slot.to_string()],
        ),
        _ => Err(ConfigError::UnknownKey(key.to_string())),
    }
}

/// Look up a config value as displayed text, `None` when unset.
pub fn get_config_value(doc: &toml_edit::DocumentMut, key: &str) -> Result<Option<String>, ConfigError> {
    let path = key_path(key)?;
    let mut item = doc.get("ui");
    for part in &path {
        item = item.and_then(|i| i.get(part));
    }
    Ok(item.and_then(|i| i.as_value()).map(|v| {
        if let Some(s) = v.as_str() {
            s.to_string()
        } else if let Some(b) = v.as_bool() {
            b.to_string()
        } else {
            v.to_string().trim().to_string()
        }
    }))
}

/// Set a config value, validating it against the key's type.
pub fn set_config_value(
    doc: &mut toml_edit::DocumentMut,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let path = key_path(key)?;
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: key.to_string(),
        reason,
    };

    let new_value = match path[0].as_str() {
        "default_category" => {
            let category: Category = value.parse().map_err(invalid)?;
            toml_edit::value(category.as_str())
        }
        "show_key_hints" => {
            let flag: bool = value
                .parse()
                .map_err(|_| invalid("expected true or false".to_string()))?;
            toml_edit::value(flag)
        }
        _ => {
            if crate::tui::theme::parse_hex_color(value).is_none() {
                return Err(invalid("expected a hex color like #1E1E2E".to_string()));
            }
            toml_edit::value(value)
        }
    };

    if !doc.contains_key("ui") {
        doc["ui"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    let mut table = &mut doc["ui"];
    for part in &path[..path.len() - 1] {
        if table.get(part).is_none() {
            let mut child = toml_edit::Table::new();
            child.set_implicit(true);
            table[part.as_str()] = toml_edit::Item::Table(child);
        }
        table = &mut table[part.as_str()];
    }
    table[path[path.len() - 1].as_str()] = new_value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r##"# my tasklist settings
[ui]
default_category = "work" # most of my stuff
show_key_hints = true

[ui.colors.dark]
background = "#101010"
"##;

    #[test]
    fn missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.ui.default_category, Category::General);
        assert!(read_config_doc(tmp.path()).unwrap().to_string().is_empty());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(config_path(tmp.path()), "[ui\nbroken").unwrap();
        assert!(matches!(
            read_config(tmp.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn round_trip_preserves_formatting() {
        let tmp = TempDir::new().unwrap();
        fs::write(config_path(tmp.path()), SAMPLE).unwrap();
        let doc = read_config_doc(tmp.path()).unwrap();
        write_config_doc(tmp.path(), &doc).unwrap();
        assert_eq!(fs::read_to_string(config_path(tmp.path())).unwrap(), SAMPLE);
    }

    #[test]
    fn get_values() {
        let doc: toml_edit::DocumentMut = SAMPLE.parse().unwrap();
        assert_eq!(
            get_config_value(&doc, "default_category").unwrap().as_deref(),
            Some("work")
        );
        assert_eq!(
            get_config_value(&doc, "show_key_hints").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(
            get_config_value(&doc, "colors.dark.background").unwrap().as_deref(),
            Some("#101010")
        );
        assert_eq!(get_config_value(&doc, "colors.light.text").unwrap(), None);
        assert!(matches!(
            get_config_value(&doc, "colors.sepia.text"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_value_keeps_comments() {
        let mut doc: toml_edit::DocumentMut = SAMPLE.parse().unwrap();
        set_config_value(&mut doc, "default_category", "Study").unwrap();
        let text = doc.to_string();
        assert!(text.starts_with("# my tasklist settings"));
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config.ui.default_category, Category::Study);
    }

    #[test]
    fn set_value_creates_tables() {
        let mut doc = toml_edit::DocumentMut::new();
        set_config_value(&mut doc, "colors.light.highlight", "#FF0000").unwrap();
        set_config_value(&mut doc, "show_key_hints", "false").unwrap();
        let config: Config = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(
            config.ui.colors.light.get("highlight"),
            Some(&"#FF0000".to_string())
        );
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn set_value_validates() {
        let mut doc = toml_edit::DocumentMut::new();
        assert!(matches!(
            set_config_value(&mut doc, "default_category", "chores"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            set_config_value(&mut doc, "show_key_hints", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            set_config_value(&mut doc, "colors.dark.text", "blue"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            set_config_value(&mut doc, "theme", "dark"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
