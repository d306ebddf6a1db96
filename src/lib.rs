//! zshelf: a Zellij plugin for browsing a book catalog.
//!
//! The plugin shows a fixed catalog of books and lets the user:
//! - filter by title substring, author and genre
//! - page through the matches a page at a time ("show more")
//! - open a detail view for a single book
//! - switch between a day and a night color theme
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Typed events and actions                         │
//! │  - Pagination cursor, overlays, forms               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Domain (domain/)         │   │ UI (ui/)                 │
//! │ - Books, catalog         │   │ - Page/detail projection │
//! │ - Filter evaluation      │   │ - Day/night theme        │
//! │ - Errors                 │   │ - ANSI components        │
//! └──────────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans exported to an OTLP JSON file│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zshelf.wasm" {
//!         color_scheme "dark"
//!         theme "night"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! for event in [Event::KeyDown, Event::SelectHighlighted, Event::CloseDetail] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.selection.is_none());
//! # Ok::<(), zshelf::ShelfError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Overlay};
pub use domain::{Catalog, Result, ShelfError};
pub use ui::{Theme, ThemeSetting};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Host color-scheme preference (`color_scheme "dark"`).
    ///
    /// Plugins cannot ask the OS, so the layout passes it in. Default: light.
    pub color_scheme_dark: bool,

    /// Explicit startup theme (`theme "day"` / `theme "night"`).
    pub theme: Option<ThemeSetting>,

    /// `EnvFilter` directive for trace export. Tracing is off when `None`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses the plugin configuration.
    ///
    /// Unrecognised `color_scheme` or `theme` values are logged and ignored.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zshelf::{Config, ThemeSetting};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("color_scheme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.color_scheme_dark);
    /// assert_eq!(config.startup_theme(), ThemeSetting::Night);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let color_scheme_dark = match config.get("color_scheme").map(|s| s.trim().to_ascii_lowercase()) {
            Some(scheme) if scheme == "dark" => true,
            Some(scheme) if scheme == "light" => false,
            Some(scheme) => {
                tracing::debug!(color_scheme = %scheme, "unknown color scheme, assuming light");
                false
            }
            None => false,
        };

        let theme = config
            .get("theme")
            .and_then(|raw| match raw.parse::<ThemeSetting>() {
                Ok(setting) => Some(setting),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring theme option");
                    None
                }
            });

        Self {
            color_scheme_dark,
            theme,
            trace_level: config
                .get("trace_level")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Theme at startup: the explicit `theme` option, else the host preference.
    #[must_use]
    pub const fn startup_theme(&self) -> ThemeSetting {
        match self.theme {
            Some(setting) => setting,
            None => ThemeSetting::from_preference(self.color_scheme_dark),
        }
    }
}

/// Builds the initial state over the embedded catalog.
///
/// All books match, the cursor sits on page 1, and no overlay is open.
///
/// # Errors
///
/// Returns [`ShelfError::Catalog`] or [`ShelfError::Json`] if the embedded
/// catalog is invalid, and [`ShelfError::Theme`] if the startup palette fails
/// to parse.
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = Catalog::builtin()?;
    let theme = config.startup_theme();
    tracing::debug!(books = catalog.books().len(), theme = theme.as_str(), "catalog loaded");

    let theme = Theme::try_for_setting(theme)?;

    Ok(AppState::with_theme(catalog, theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.startup_theme(), ThemeSetting::Day);
    }

    #[test]
    fn explicit_theme_overrides_color_scheme() {
        let config = Config::from_zellij(&map(&[("color_scheme", "dark"), ("theme", "day")]));
        assert!(config.color_scheme_dark);
        assert_eq!(config.startup_theme(), ThemeSetting::Day);
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = Config::from_zellij(&map(&[("color_scheme", "sepia"), ("theme", "dusk")]));
        assert!(!config.color_scheme_dark);
        assert_eq!(config.theme, None);
        assert_eq!(config.startup_theme(), ThemeSetting::Day);
    }

    #[test]
    fn blank_trace_level_disables_tracing() {
        let config = Config::from_zellij(&map(&[("trace_level", "  ")]));
        assert_eq!(config.trace_level, None);

        let config = Config::from_zellij(&map(&[("trace_level", "debug")]));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_shows_first_page_of_everything() {
        let config = Config {
            theme: Some(ThemeSetting::Night),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();

        assert_eq!(state.matches.len(), state.catalog.books().len());
        assert_eq!(state.cursor.page(), 1);
        assert_eq!(state.overlay, Overlay::Browsing);
        assert_eq!(state.theme.setting, ThemeSetting::Night);
        assert_eq!(state.settings_form.selection, ThemeSetting::Night);
        assert_eq!(state.theme, Theme::try_for_setting(ThemeSetting::Night).unwrap());
    }
}
