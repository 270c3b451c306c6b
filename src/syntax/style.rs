//! Colors and palettes
//!
//! A palette maps each category to a display color. It is configuration
//! handed to the renderer; the classifier never looks at it.

use std::collections::HashMap;
use std::str::FromStr;

use super::tokens::Category;
use crate::error::TimelineError;

/// Display color for a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Nothing drawn (whitespace)
    Transparent,
    /// 24-bit color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Shown when a palette has no entry for a category
    pub const FALLBACK: Color = Color::Rgb(0xFF, 0x00, 0xFF);

    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Transparent)
    }

    /// Terminal color, None for transparent
    pub fn to_crossterm(self) -> Option<crossterm::style::Color> {
        match self {
            Color::Transparent => None,
            Color::Rgb(r, g, b) => Some(crossterm::style::Color::Rgb { r, g, b }),
        }
    }
}

impl FromStr for Color {
    type Err = TimelineError;

    /// Parse `#RRGGBB`, `#RGB` or `transparent`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Color::Transparent);
        }

        let invalid = || TimelineError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                Ok(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Transparent => f.write_str("transparent"),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

/// Built-in theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(TimelineError::InvalidValue {
                key: "theme".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Category to color mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<Category, Color>,
}

impl Palette {
    /// Create a palette with no entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette for a built-in theme
    pub fn for_theme(theme: Theme) -> Self {
        let dark = theme == Theme::Dark;
        let mut palette = Self::new();
        for category in Category::ALL {
            let color = match category {
                Category::Keyword => Color::Rgb(0xFF, 0x6B, 0x6B),
                Category::Class => Color::Rgb(0x4E, 0xCD, 0xC4),
                Category::Function => Color::Rgb(0x45, 0xB7, 0xD1),
                Category::Variable => Color::Rgb(0x96, 0xCE, 0xB4),
                Category::Operator if dark => Color::Rgb(0xFF, 0xD9, 0x3D),
                Category::Operator => Color::Rgb(0xFF, 0xD7, 0x00),
                Category::String => Color::Rgb(0xFF, 0x8C, 0x42),
                Category::Number => Color::Rgb(0x6A, 0x05, 0x72),
                Category::Boolean => Color::Rgb(0xFF, 0x40, 0x81),
                Category::Comment => Color::Rgb(0x78, 0x90, 0x9C),
                Category::Import => Color::Rgb(0x26, 0xA6, 0x9A),
                Category::Decorator => Color::Rgb(0xBA, 0x68, 0xC8),
                Category::Punctuation => Color::Rgb(0xB0, 0xBE, 0xC5),
                Category::Bracket => Color::Rgb(0x00, 0xBC, 0xD4),
                Category::Property => Color::Rgb(0x8B, 0xC3, 0x4A),
                Category::Space => Color::Transparent,
                Category::Default if dark => Color::Rgb(0xE0, 0xE0, 0xE0),
                Category::Default => Color::Rgb(0x42, 0x42, 0x42),
            };
            palette.set(category, color);
        }
        palette
    }

    pub fn dark() -> Self {
        Self::for_theme(Theme::Dark)
    }

    pub fn light() -> Self {
        Self::for_theme(Theme::Light)
    }

    /// Set the color for a category
    pub fn set(&mut self, category: Category, color: Color) {
        self.colors.insert(category, color);
    }

    /// Builder: set the color for a category
    pub fn with(mut self, category: Category, color: Color) -> Self {
        self.set(category, color);
        self
    }

    /// Configured color, if any
    pub fn get(&self, category: Category) -> Option<Color> {
        self.colors.get(&category).copied()
    }

    /// Color for a category, falling back to a visible color when missing
    pub fn color_for(&self, category: Category) -> Color {
        self.get(category).unwrap_or_else(|| {
            log::debug!("palette has no color for '{}', using fallback", category);
            Color::FALLBACK
        })
    }

    /// Categories with no color
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| !self.colors.contains_key(c))
            .collect()
    }

    /// Apply overrides from `category = "#RRGGBB"` pairs
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> crate::error::Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in overrides {
            let category = Category::from_name(name)
                .ok_or_else(|| TimelineError::UnknownCategory(name.to_string()))?;
            self.set(category, value.parse()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!("#FF6B6B".parse::<Color>().unwrap(), Color::Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!("#ff6b6b".parse::<Color>().unwrap(), Color::Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!("#0F0".parse::<Color>().unwrap(), Color::Rgb(0x00, 0xFF, 0x00));
        assert_eq!("transparent".parse::<Color>().unwrap(), Color::Transparent);
    }

    #[test]
    fn test_parse_color_invalid() {
        assert!("FF6B6B".parse::<Color>().is_err());
        assert!("#FF6B6".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Rgb(0x4E, 0xCD, 0xC4).to_string(), "#4ECDC4");
        assert_eq!(Color::Transparent.to_string(), "transparent");
    }

    #[test]
    fn test_themes_are_complete() {
        assert!(Palette::dark().missing().is_empty());
        assert!(Palette::light().missing().is_empty());
    }

    #[test]
    fn test_themes_differ() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert_ne!(dark.get(Category::Operator), light.get(Category::Operator));
        assert_ne!(dark.get(Category::Default), light.get(Category::Default));
        assert_eq!(dark.get(Category::Keyword), light.get(Category::Keyword));
        assert_eq!(dark.get(Category::Space), Some(Color::Transparent));
    }

    #[test]
    fn test_missing_color_falls_back() {
        let palette = Palette::new().with(Category::Keyword, Color::Rgb(1, 2, 3));
        assert_eq!(palette.color_for(Category::Keyword), Color::Rgb(1, 2, 3));
        assert_eq!(palette.color_for(Category::String), Color::FALLBACK);
        assert_eq!(palette.missing().len(), 15);
    }

    #[test]
    fn test_apply_overrides() {
        let mut palette = Palette::dark();
        palette
            .apply_overrides([("keyword", "#000000"), ("space", "#111")])
            .unwrap();
        assert_eq!(palette.get(Category::Keyword), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(palette.get(Category::Space), Some(Color::Rgb(0x11, 0x11, 0x11)));

        assert!(palette.apply_overrides([("lifetime", "#000000")]).is_err());
        assert!(palette.apply_overrides([("keyword", "red")]).is_err());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
    }
}
