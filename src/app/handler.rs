//! Event handling and state transition logic.
//!
//! Every user action arrives as a typed [`Event`]. [`handle_event`] applies it
//! to the [`AppState`] and reports whether the pane should re-render plus any
//! [`Action`]s for the plugin runtime. The plugin shim only translates raw key
//! presses into these events.
//!
//! # Event Types
//!
//! - **Overlays**: `OpenSearch`, `OpenSettings`, `CancelSearch`,
//!   `CancelSettings`, `CloseDetail`, `Escape`
//! - **Search**: `SubmitSearch`, `ApplyFilter`, `Char`, `Backspace`,
//!   `NextField`, `PrevField`, `NextOption`, `PrevOption`
//! - **Settings**: `SubmitSettings`, `ApplyTheme`, `NextOption`, `PrevOption`
//! - **List**: `KeyDown`, `KeyUp`, `ShowMore`, `SelectBook`,
//!   `SelectHighlighted`
//! - **Plugin**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use zshelf::app::{handle_event, AppState, Event};
//! use zshelf::domain::Catalog;
//! use zshelf::ui::theme::ThemeSetting;
//!
//! let mut state = AppState::new(Catalog::builtin()?, ThemeSetting::Day);
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::Overlay;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{BookId, FilterCriteria};
use crate::ui::theme::ThemeSetting;

/// Typed commands produced from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the search overlay with the title field focused.
    OpenSearch,
    /// Opens the settings overlay.
    OpenSettings,
    /// Closes the search overlay without searching. The draft is kept.
    CancelSearch,
    /// Closes the settings overlay without applying the draft.
    CancelSettings,
    /// Submits the search form draft.
    SubmitSearch,
    /// Submits explicit criteria, as if typed into the search form.
    ApplyFilter(FilterCriteria),
    /// Applies the settings form draft.
    SubmitSettings,
    /// Applies an explicit theme, as if chosen in the settings form.
    ApplyTheme(ThemeSetting),
    /// Advances to the next page when one exists.
    ShowMore,
    /// Opens the detail overlay for a book. Unknown ids are ignored.
    SelectBook(BookId),
    /// Opens the detail overlay for the highlighted row.
    SelectHighlighted,
    /// Closes the detail overlay and clears the selection.
    CloseDetail,
    /// Moves the list highlight down (wraps).
    KeyDown,
    /// Moves the list highlight up (wraps).
    KeyUp,
    /// Focuses the next search form field.
    NextField,
    /// Focuses the previous search form field.
    PrevField,
    /// Next dropdown option, or the other theme in settings.
    NextOption,
    /// Previous dropdown option, or the other theme in settings.
    PrevOption,
    /// Appends to the search title field.
    Char(char),
    /// Deletes the last character of the search title field.
    Backspace,
    /// Closes whichever overlay is open.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Events that do not apply in the current
/// overlay, such as typing while browsing, return `(false, [])`.
///
/// # Errors
///
/// Returns [`ShelfError::Theme`](crate::ShelfError::Theme) when a theme change
/// cannot load its palette. The state is left as it was.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, overlay = ?state.overlay).entered();

    match event {
        Event::OpenSearch => {
            tracing::debug!("opening search overlay");
            state.open_overlay(Overlay::Search);
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            state.open_overlay(Overlay::Settings);
            Ok((true, vec![]))
        }
        Event::CancelSearch => Ok(close_if(state, Overlay::Search)),
        Event::CancelSettings => Ok(close_if(state, Overlay::Settings)),
        Event::CloseDetail => Ok(close_if(state, Overlay::Detail)),
        Event::Escape => {
            if state.overlay == Overlay::Browsing {
                return Ok((false, vec![]));
            }
            state.close_overlay();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            let criteria = state.search_form.criteria();
            Ok(submit_filter(state, criteria))
        }
        Event::ApplyFilter(criteria) => Ok(submit_filter(state, criteria.clone())),
        Event::SubmitSettings => {
            if state.overlay != Overlay::Settings {
                return Ok((false, vec![]));
            }
            let selection = state.settings_form.selection;
            submit_theme(state, selection)
        }
        Event::ApplyTheme(setting) => submit_theme(state, *setting),
        Event::ShowMore => {
            if state.overlay != Overlay::Browsing {
                return Ok((false, vec![]));
            }
            if state.show_more() {
                tracing::debug!(page = state.cursor.page(), "advanced to next page");
                Ok((true, vec![]))
            } else {
                tracing::debug!("show more ignored, nothing remaining");
                Ok((false, vec![]))
            }
        }
        Event::SelectBook(id) => {
            if state.select_book(id) {
                tracing::debug!(book_id = %id, "book selected");
                Ok((true, vec![]))
            } else {
                tracing::debug!(book_id = %id, "ignoring selection of unknown book");
                Ok((false, vec![]))
            }
        }
        Event::SelectHighlighted => {
            if state.overlay != Overlay::Browsing {
                return Ok((false, vec![]));
            }
            let Some(id) = state.highlighted_book().map(|book| book.id.clone()) else {
                tracing::debug!("no book highlighted");
                return Ok((false, vec![]));
            };
            Ok((state.select_book(&id), vec![]))
        }
        Event::KeyDown | Event::KeyUp => {
            if state.overlay != Overlay::Browsing {
                return Ok((false, vec![]));
            }
            if *event == Event::KeyDown {
                state.move_highlight_down();
            } else {
                state.move_highlight_up();
            }
            Ok((true, vec![]))
        }
        Event::NextField | Event::PrevField => match state.overlay {
            Overlay::Search => {
                let focus = state.search_form.focus;
                state.search_form.focus = if *event == Event::NextField {
                    focus.next()
                } else {
                    focus.prev()
                };
                Ok((true, vec![]))
            }
            Overlay::Settings => {
                state.settings_form.selection = state.settings_form.selection.toggled();
                Ok((true, vec![]))
            }
            Overlay::Browsing | Overlay::Detail => Ok((false, vec![])),
        },
        Event::NextOption | Event::PrevOption => match state.overlay {
            Overlay::Search => {
                state.search_form.cycle_option(*event == Event::NextOption);
                Ok((true, vec![]))
            }
            Overlay::Settings => {
                state.settings_form.selection = state.settings_form.selection.toggled();
                Ok((true, vec![]))
            }
            Overlay::Browsing | Overlay::Detail => Ok((false, vec![])),
        },
        Event::Char(c) => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            state.search_form.title.push(*c);
            tracing::trace!(title = %state.search_form.title, "search title updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.overlay != Overlay::Search {
                return Ok((false, vec![]));
            }
            state.search_form.title.pop();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn close_if(state: &mut AppState, overlay: Overlay) -> (bool, Vec<Action>) {
    if state.overlay != overlay {
        return (false, vec![]);
    }
    state.close_overlay();
    (true, vec![])
}

fn submit_filter(state: &mut AppState, criteria: FilterCriteria) -> (bool, Vec<Action>) {
    state.apply_filter(criteria);
    state.close_overlay();
    tracing::debug!(
        match_count = state.matches.len(),
        remaining = state.current_page().remaining,
        "search submitted"
    );
    (true, vec![])
}

fn submit_theme(state: &mut AppState, setting: ThemeSetting) -> Result<(bool, Vec<Action>)> {
    state.set_theme(setting)?;
    if state.overlay == Overlay::Settings {
        state.close_overlay();
    }
    tracing::debug!(theme = setting.as_str(), "theme applied");
    Ok((true, vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), ThemeSetting::Day)
    }

    fn send(state: &mut AppState, event: Event) -> bool {
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn overlays_open_and_cancel() {
        let mut state = state();
        assert!(send(&mut state, Event::OpenSearch));
        assert_eq!(state.overlay, Overlay::Search);
        assert!(send(&mut state, Event::CancelSearch));
        assert_eq!(state.overlay, Overlay::Browsing);

        assert!(send(&mut state, Event::OpenSettings));
        assert!(!send(&mut state, Event::CancelSearch));
        assert_eq!(state.overlay, Overlay::Settings);
        assert!(send(&mut state, Event::Escape));
        assert_eq!(state.overlay, Overlay::Browsing);
    }

    #[test]
    fn overlays_replace_each_other() {
        let mut state = state();
        send(&mut state, Event::OpenSearch);
        send(&mut state, Event::OpenSettings);
        assert_eq!(state.overlay, Overlay::Settings);
    }

    #[test]
    fn typing_edits_title_only_in_search() {
        let mut state = state();
        assert!(!send(&mut state, Event::Char('x')));

        send(&mut state, Event::OpenSearch);
        for c in "frankx".chars() {
            send(&mut state, Event::Char(c));
        }
        send(&mut state, Event::Backspace);
        assert_eq!(state.search_form.title, "frank");

        assert!(send(&mut state, Event::SubmitSearch));
        assert_eq!(state.overlay, Overlay::Browsing);
        assert_eq!(state.matches.len(), 1);
        assert_eq!(state.matches[0].title, "Frankenstein");
    }

    #[test]
    fn cancelled_search_keeps_draft_but_not_results() {
        let mut state = state();
        let total = state.matches.len();
        send(&mut state, Event::OpenSearch);
        send(&mut state, Event::Char('z'));
        send(&mut state, Event::CancelSearch);
        assert_eq!(state.matches.len(), total);
        assert_eq!(state.search_form.title, "z");
    }

    #[test]
    fn settings_submit_applies_theme() {
        let mut state = state();
        send(&mut state, Event::OpenSettings);
        send(&mut state, Event::NextOption);
        assert_eq!(state.theme.setting, ThemeSetting::Day);
        send(&mut state, Event::SubmitSettings);
        assert_eq!(state.theme.setting, ThemeSetting::Night);
        assert_eq!(state.overlay, Overlay::Browsing);
    }

    #[test]
    fn settings_cancel_discards_draft() {
        let mut state = state();
        send(&mut state, Event::OpenSettings);
        send(&mut state, Event::NextOption);
        send(&mut state, Event::CancelSettings);
        assert_eq!(state.theme.setting, ThemeSetting::Day);

        send(&mut state, Event::OpenSettings);
        assert_eq!(state.settings_form.selection, ThemeSetting::Day);
    }

    #[test]
    fn select_highlighted_opens_detail() {
        let mut state = state();
        send(&mut state, Event::KeyDown);
        assert!(send(&mut state, Event::SelectHighlighted));
        assert_eq!(state.overlay, Overlay::Detail);
        assert_eq!(state.selection, Some(state.matches[1].id.clone()));

        assert!(send(&mut state, Event::CloseDetail));
        assert!(state.selection.is_none());
    }

    #[test]
    fn unknown_selection_does_not_render() {
        let mut state = state();
        assert!(!send(&mut state, Event::SelectBook(BookId::from("nope"))));
        assert_eq!(state.overlay, Overlay::Browsing);
    }

    #[test]
    fn navigation_is_inert_under_overlays() {
        let mut state = state();
        send(&mut state, Event::OpenSearch);
        assert!(!send(&mut state, Event::KeyDown));
        assert!(!send(&mut state, Event::ShowMore));
        assert_eq!(state.cursor.page(), 1);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
