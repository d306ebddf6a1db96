//! Day/night theme controller and ANSI escape sequence generation.
//!
//! The two core display colors come from [`apply_theme`]: a "dark" color used
//! as foreground and a "light" color used as background. Night mode swaps
//! them, so the "dark" color is white there. Secondary chrome colors (accent,
//! borders, muted text) live in built-in TOML palettes.
//!
//! # TOML Format
//!
//! ```toml
//! name = "night"
//!
//! [colors]
//! accent = "#f5c2e7"
//! border = "#45475a"
//! muted = "#9399b2"
//! disabled = "#585b70"
//! empty_state = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zshelf::ui::theme::{apply_theme, Rgb, ThemeSetting};
//!
//! let pair = apply_theme(ThemeSetting::Night);
//! assert_eq!(pair.dark, Rgb(255, 255, 255));
//! assert_eq!(pair.light, Rgb(10, 10, 20));
//! ```

use crate::domain::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#rrggbb` (or `rrggbb`) hex color.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Theme`] for anything that is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ShelfError::Theme(format!("invalid hex color {hex:?}")));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ShelfError::Theme(format!("invalid hex color {hex:?}: {e}")))
        };

        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ShelfError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The user's theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeSetting {
    #[default]
    Day,
    Night,
}

impl ThemeSetting {
    /// Startup default: night when the host prefers a dark color scheme.
    #[must_use]
    pub const fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Night
        } else {
            Self::Day
        }
    }

    /// The other setting.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    /// Lowercase name, as used in configuration and palette files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Label shown in the settings form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

impl FromStr for ThemeSetting {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(ShelfError::Config(format!(
                "unknown theme {other:?}, expected \"day\" or \"night\""
            ))),
        }
    }
}

/// The two display colors pushed to the rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Foreground color.
    pub dark: Rgb,
    /// Background color.
    pub light: Rgb,
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// Maps a theme selection to its color pair.
///
/// Night swaps the day values: the "dark" color is used as foreground, so it
/// is white on a near-black background.
#[must_use]
pub const fn apply_theme(setting: ThemeSetting) -> ColorPair {
    match setting {
        ThemeSetting::Day => ColorPair {
            dark: INK,
            light: PAPER,
        },
        ThemeSetting::Night => ColorPair {
            dark: PAPER,
            light: INK,
        },
    }
}

/// Chrome colors loaded from a built-in palette file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChromeColors {
    /// Header title, focused form field, highlighted row marker.
    pub accent: Rgb,
    /// Separator lines and overlay frames.
    pub border: Rgb,
    /// Secondary text (author names, footer hints).
    pub muted: Rgb,
    /// The show-more button when there is nothing left.
    pub disabled: Rgb,
    /// Empty-state message.
    pub empty_state: Rgb,
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
    name: String,
    colors: ChromeColors,
}

/// Complete rendering palette for one theme setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub setting: ThemeSetting,
    pub pair: ColorPair,
    pub colors: ChromeColors,
}

impl Theme {
    /// Parses the built-in palette for `setting`.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Theme`] if the embedded TOML is malformed.
    pub fn try_for_setting(setting: ThemeSetting) -> Result<Self> {
        let toml_str = match setting {
            ThemeSetting::Day => include_str!("../../themes/day.toml"),
            ThemeSetting::Night => include_str!("../../themes/night.toml"),
        };

        let palette: PaletteFile = toml::from_str(toml_str)
            .map_err(|e| ShelfError::Theme(format!("failed to parse {} palette: {e}", setting.as_str())))?;

        Ok(Self {
            name: palette.name,
            setting,
            pair: apply_theme(setting),
            colors: palette.colors,
        })
    }

    /// Returns the built-in palette for `setting`.
    ///
    /// # Panics
    ///
    /// Panics if a built-in palette fails to parse (guarded by tests).
    #[must_use]
    pub fn for_setting(setting: ThemeSetting) -> Self {
        Self::try_for_setting(setting).expect("built-in palettes should always parse")
    }

    /// ANSI 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape sequence.
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Base text style: foreground on background.
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}{}", Self::fg(self.pair.dark), Self::bg(self.pair.light))
    }

    /// Inverted style used for the highlighted row.
    #[must_use]
    pub fn inverted(&self) -> String {
        format!("{}{}", Self::fg(self.pair.light), Self::bg(self.pair.dark))
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_setting(ThemeSetting::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_colors() {
        let pair = apply_theme(ThemeSetting::Day);
        assert_eq!(pair.dark, Rgb(10, 10, 20));
        assert_eq!(pair.light, Rgb(255, 255, 255));
    }

    #[test]
    fn night_swaps_day() {
        let day = apply_theme(ThemeSetting::Day);
        let night = apply_theme(ThemeSetting::Night);
        assert_eq!(night.dark, day.light);
        assert_eq!(night.light, day.dark);
    }

    #[test]
    fn applying_twice_is_stable() {
        for setting in [ThemeSetting::Day, ThemeSetting::Night] {
            assert_eq!(apply_theme(setting), apply_theme(setting));
        }
    }

    #[test]
    fn preference_picks_startup_theme() {
        assert_eq!(ThemeSetting::from_preference(true), ThemeSetting::Night);
        assert_eq!(ThemeSetting::from_preference(false), ThemeSetting::Day);
    }

    #[test]
    fn parses_setting_names() {
        assert_eq!("Night".parse::<ThemeSetting>().unwrap(), ThemeSetting::Night);
        assert_eq!(" day ".parse::<ThemeSetting>().unwrap(), ThemeSetting::Day);
        assert!(matches!("dusk".parse::<ThemeSetting>(), Err(ShelfError::Config(_))));
    }

    #[test]
    fn builtin_palettes_parse() {
        for setting in [ThemeSetting::Day, ThemeSetting::Night] {
            let theme = Theme::try_for_setting(setting).unwrap();
            assert_eq!(theme.name, setting.as_str());
            assert_eq!(theme.pair, apply_theme(setting));
        }
    }

    #[test]
    fn hex_round_trip_and_rejects_short_values() {
        let color = Rgb::from_hex("#1f6feb").unwrap();
        assert_eq!(color, Rgb(0x1f, 0x6f, 0xeb));
        assert_eq!(color.to_string(), "#1f6feb");
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg(Rgb(1, 2, 3)), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg(Rgb(1, 2, 3)), "\u{1b}[48;2;1;2;3m");
    }
}
