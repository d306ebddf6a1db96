//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; resolving
//! author names, slicing pages and counting remaining matches has already
//! happened.

use crate::domain::BookId;
use crate::ui::theme::ColorPair;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header line.
    pub header: HeaderInfo,

    /// Rows of the current page that fit on screen.
    pub display_items: Vec<DisplayItem>,

    /// Position of the highlighted row within `display_items`.
    pub selected_index: usize,

    /// Show-more affordance below the list.
    pub show_more: ShowMoreInfo,

    /// Shown instead of the list when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Overlay drawn above the list, if one is open.
    pub overlay: Option<OverlayView>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Foreground/background colors of the active theme.
    pub colors: ColorPair,
}

/// One book row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: BookId,
    pub title: String,
    pub author_name: String,
    pub image_uri: String,
    /// Whether the keyboard highlight is on this row.
    pub is_selected: bool,
}

/// Projection of one page of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<DisplayItem>,
    /// Matched books beyond this page.
    pub remaining: usize,
    /// `remaining > 0`; enables the show-more control.
    pub has_more: bool,
}

/// Projection of a single book for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    /// `"<author name> (<year>)"`.
    pub author_year_label: String,
    pub description: String,
    pub image_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// The show-more button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    /// `"Show more (<remaining>)"`.
    pub label: String,
    pub remaining: usize,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Overlay content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayView {
    Search(SearchFormView),
    Settings(SettingsView),
    Detail(DetailView),
}

/// Search form fields as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormView {
    pub title: String,
    pub author_label: String,
    pub genre_label: String,
    /// Index of the focused field: 0 title, 1 author, 2 genre.
    pub focused: usize,
}

/// Settings form as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub theme_label: String,
}
