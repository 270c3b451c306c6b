//! Configuration file support
//!
//! Loads settings from ~/.code-timeline.toml (or
//! %USERPROFILE%\.code-timeline.toml on Windows)
//!
//! Example:
//! ```toml
//! theme = "light"
//! char-width = 8
//! cell-width = 8
//! legend = true
//! line-numbers = true
//!
//! [palette]
//! keyword = "#FF6B6B"
//! comment = "transparent"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{Result, TimelineError};
use crate::syntax::{Palette, Theme, DEFAULT_CHAR_WIDTH};

const CONFIG_FILE: &str = ".code-timeline.toml";

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme the palette starts from
    pub theme: Theme,
    /// Display width per character
    pub char_width: usize,
    /// Display width covered by one terminal cell
    pub cell_width: usize,
    /// Whether to print the color legend
    pub show_legend: bool,
    /// Whether to print line numbers
    pub show_line_numbers: bool,
    /// Per-category color overrides, applied over the theme
    pub palette_overrides: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            char_width: DEFAULT_CHAR_WIDTH,
            cell_width: DEFAULT_CHAR_WIDTH,
            show_legend: true,
            show_line_numbers: true,
            palette_overrides: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file gives the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(value) = table.get("theme") {
            self.theme = expect_str("theme", value)?.parse()?;
        }

        if let Some(value) = table.get("char-width") {
            self.char_width = expect_width("char-width", value)?;
        }

        if let Some(value) = table.get("cell-width") {
            self.cell_width = expect_width("cell-width", value)?;
        }

        if let Some(value) = table.get("legend") {
            self.show_legend = expect_bool("legend", value)?;
        }

        if let Some(value) = table.get("line-numbers") {
            self.show_line_numbers = expect_bool("line-numbers", value)?;
        }

        if let Some(value) = table.get("palette") {
            let palette = value.as_table().ok_or_else(|| invalid("palette", value))?;
            for (name, color) in palette {
                let color = expect_str(&format!("palette.{}", name), color)?;
                self.palette_overrides.push((name.clone(), color.to_string()));
            }
        }

        for key in table.keys() {
            if !matches!(
                key.as_str(),
                "theme" | "char-width" | "cell-width" | "legend" | "line-numbers" | "palette"
            ) {
                log::warn!("ignoring unknown config key '{}'", key);
            }
        }

        Ok(())
    }

    /// Palette for the configured theme with overrides applied
    pub fn palette(&self) -> Result<Palette> {
        let mut palette = Palette::for_theme(self.theme);
        palette.apply_overrides(
            self.palette_overrides
                .iter()
                .map(|(name, color)| (name.as_str(), color.as_str())),
        )?;
        Ok(palette)
    }
}

fn invalid(key: &str, value: &Value) -> TimelineError {
    TimelineError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(key, value))
}

/// Accept a TOML bool or a "yes"/"on"-style string
fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::String(s) => parse_bool(s).ok_or_else(|| invalid(key, value)),
        _ => Err(invalid(key, value)),
    }
}

/// Smallest and largest accepted width settings
pub const WIDTH_RANGE: (usize, usize) = (1, 64);

/// Clamp a width setting into `WIDTH_RANGE`
pub fn clamp_width(n: usize) -> usize {
    n.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1)
}

fn expect_width(key: &str, value: &Value) -> Result<usize> {
    let n = value.as_integer().ok_or_else(|| invalid(key, value))?;
    Ok(clamp_width(usize::try_from(n).unwrap_or(0)))
}

/// Parse a boolean value from string
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Category, Color};

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
theme = "light"
char-width = 4
cell-width = 2
legend = false
line-numbers = "off"

[palette]
keyword = "#000000"
"##;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.char_width, 4);
        assert_eq!(config.cell_width, 2);
        assert!(!config.show_legend);
        assert!(!config.show_line_numbers);
        assert_eq!(
            config.palette_overrides,
            vec![("keyword".to_string(), "#000000".to_string())]
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.char_width, 8);
        assert!(config.show_legend);
    }

    #[test]
    fn test_widths_are_clamped() {
        let config = Config::parse("char-width = 0\ncell-width = 1000").unwrap();
        assert_eq!(config.char_width, 1);
        assert_eq!(config.cell_width, 64);

        let config = Config::parse("char-width = -5").unwrap();
        assert_eq!(config.char_width, 1);
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(0), 1);
        assert_eq!(clamp_width(8), 8);
        assert_eq!(clamp_width(usize::MAX), 64);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::parse("theme = \"neon\"").is_err());
        assert!(Config::parse("char-width = \"wide\"").is_err());
        assert!(Config::parse("legend = 3").is_err());
        assert!(Config::parse("palette = 1").is_err());
        assert!(Config::parse("not toml at all [").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert!(Config::parse("auto-save = true").is_ok());
    }

    #[test]
    fn test_palette_overrides() {
        let config = Config::parse("[palette]\nstring = \"#123456\"").unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.get(Category::String), Some(Color::Rgb(0x12, 0x34, 0x56)));
        assert_eq!(palette.get(Category::Keyword), Palette::dark().get(Category::Keyword));

        let config = Config::parse("[palette]\nlifetime = \"#123456\"").unwrap();
        assert!(config.palette().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));

        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("anything"), None);
    }
}
