//! Zellij plugin shim.
//!
//! Translates Zellij key events into [`zshelf::Event`]s, hands them to the
//! library's `handle_event`, runs the returned actions and delegates drawing to
//! `zshelf::ui::render`. All browsing logic lives in the library.
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up` (also `Ctrl+n`/`Ctrl+p`): Move highlight
//! - `Enter`: Open book details
//! - `m`: Show more
//! - `/`: Search
//! - `s`: Settings
//! - `q`: Hide plugin
//!
//! Search:
//! - Printable keys: Edit title
//! - `Tab`/`Shift+Tab`: Change field
//! - `Left`/`Right`: Change author or genre
//! - `Enter`: Apply, `Esc`: Cancel
//!
//! Settings:
//! - `Left`/`Right`/`Tab`: Toggle day/night
//! - `Enter`: Apply, `Esc`: Cancel
//!
//! Details:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zshelf::{handle_event, Action, AppState, Config, Event, Overlay};

register_plugin!(State);

#[derive(Default)]
struct State {
    /// `None` until `load` succeeds.
    app: Option<AppState>,

    /// Set when the embedded catalog failed to load.
    load_error: Option<String>,
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zshelf::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(?config, "parsed configuration");

        match zshelf::initialize(&config) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog");
                self.load_error = Some(e.to_string());
            }
        }

        subscribe(&[EventType::Key]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };
        let Some(app) = self.app.as_mut() else {
            if key.bare_key == BareKey::Char('q') || key.bare_key == BareKey::Esc {
                hide_self();
            }
            return false;
        };

        let _guard = tracing::debug_span!("plugin_update", key = ?key.bare_key).entered();

        let Some(our_event) = map_key_event(app.overlay, &key) else {
            return false;
        };

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        match (&self.app, &self.load_error) {
            (Some(app), _) => zshelf::ui::render(app, rows, cols),
            (None, Some(error)) => println!("zshelf: {error}"),
            (None, None) => {}
        }
    }
}

/// Maps a key to a command for the layer that currently has input.
fn map_key_event(overlay: Overlay, key: &KeyWithModifier) -> Option<Event> {
    let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
    let shift = key.has_modifiers(&[KeyModifier::Shift]);

    match overlay {
        Overlay::Browsing => Some(match key.bare_key {
            BareKey::Char('n') if ctrl => Event::KeyDown,
            BareKey::Char('p') if ctrl => Event::KeyUp,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::SelectHighlighted,
            BareKey::Char('m') => Event::ShowMore,
            BareKey::Char('/') => Event::OpenSearch,
            BareKey::Char('s') => Event::OpenSettings,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        }),
        Overlay::Search => Some(match key.bare_key {
            BareKey::Tab if shift => Event::PrevField,
            BareKey::Tab => Event::NextField,
            BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Right => Event::NextOption,
            BareKey::Left => Event::PrevOption,
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Esc => Event::CancelSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(_) if ctrl => return None,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        }),
        Overlay::Settings => Some(match key.bare_key {
            BareKey::Right | BareKey::Tab => Event::NextOption,
            BareKey::Left => Event::PrevOption,
            BareKey::Enter => Event::SubmitSettings,
            BareKey::Esc => Event::CancelSettings,
            _ => return None,
        }),
        Overlay::Detail => match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
            _ => None,
        },
    }
}

#[tracing::instrument(level = "debug")]
fn execute_action(action: &Action) {
    match action {
        Action::CloseFocus => {
            tracing::debug!("hiding plugin");
            hide_self();
        }
    }
}
