//! Overlay state and form drafts.
//!
//! The application is in one of four states: browsing the list, or one of the
//! search, settings, or detail overlays layered above it. Opening an overlay
//! replaces whichever one was open; cancelling or closing returns to browsing.
//!
//! The search and settings forms keep their draft values between openings, so
//! reopening the search overlay shows the last submitted (or cancelled) input.
//!
//! # Example
//!
//! ```rust
//! use zshelf::app::modes::{Overlay, SearchField};
//!
//! let overlay = Overlay::Search;
//! assert_ne!(overlay, Overlay::Browsing);
//! assert_eq!(SearchField::Title.next(), SearchField::Author);
//! ```

use crate::domain::{AuthorId, Catalog, FilterCriteria, GenreId, Selector};
use crate::ui::theme::ThemeSetting;

/// Which layer currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// The book list; no overlay open.
    #[default]
    Browsing,
    /// Search form with title, author and genre fields.
    Search,
    /// Theme selection form.
    Settings,
    /// Detail view of the active selection.
    Detail,
}

/// Focusable fields of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }
}

/// A dropdown: labelled options plus the chosen index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub options: Vec<(Selector<T>, String)>,
    pub index: usize,
}

impl<T: Clone> Choice<T> {
    fn new(any_label: &str, entries: Vec<(T, String)>) -> Self {
        let mut options = Vec::with_capacity(entries.len() + 1);
        options.push((Selector::Any, any_label.to_string()));
        options.extend(entries.into_iter().map(|(id, name)| (Selector::Only(id), name)));
        Self { options, index: 0 }
    }

    /// Moves to the next option, wrapping around.
    pub fn cycle_forward(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + 1) % self.options.len();
        }
    }

    /// Moves to the previous option, wrapping around.
    pub fn cycle_backward(&mut self) {
        if !self.options.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.options.len() - 1);
        }
    }

    /// The chosen selector; `Any` if the options are somehow empty.
    #[must_use]
    pub fn selected(&self) -> Selector<T> {
        self.options
            .get(self.index)
            .map_or(Selector::Any, |(selector, _)| selector.clone())
    }

    /// Label of the chosen option.
    #[must_use]
    pub fn label(&self) -> &str {
        self.options.get(self.index).map_or("", |(_, label)| label.as_str())
    }
}

/// Draft values of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub author: Choice<AuthorId>,
    pub genre: Choice<GenreId>,
    pub focus: SearchField,
}

impl SearchForm {
    /// Builds an empty form whose dropdowns list the catalog's authors and
    /// genres after the "any" entries.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            author: Choice::new("All Authors", catalog.authors_by_name()),
            genre: Choice::new("All Genres", catalog.genres_by_name()),
            focus: SearchField::Title,
        }
    }

    /// Cycles the focused dropdown. No-op on the title field.
    pub fn cycle_option(&mut self, forward: bool) {
        match (self.focus, forward) {
            (SearchField::Title, _) => {}
            (SearchField::Author, true) => self.author.cycle_forward(),
            (SearchField::Author, false) => self.author.cycle_backward(),
            (SearchField::Genre, true) => self.genre.cycle_forward(),
            (SearchField::Genre, false) => self.genre.cycle_backward(),
        }
    }

    /// Fresh criteria from the current draft.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            title_query: self.title.clone(),
            author: self.author.selected(),
            genre: self.genre.selected(),
        }
    }
}

/// Draft value of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsForm {
    pub selection: ThemeSetting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        let authors = BTreeMap::from([
            (AuthorId::from("b"), "Bram Stoker".to_string()),
            (AuthorId::from("a"), "Mary Shelley".to_string()),
        ]);
        let genres = BTreeMap::from([(GenreId::from("horror"), "Horror".to_string())]);
        Catalog::new(vec![], authors, genres, 12).unwrap()
    }

    #[test]
    fn fields_cycle_both_ways() {
        let mut field = SearchField::Title;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, SearchField::Title);
        assert_eq!(SearchField::Title.prev(), SearchField::Genre);
    }

    #[test]
    fn new_form_selects_any() {
        let form = SearchForm::new(&catalog());
        assert_eq!(form.criteria(), FilterCriteria::all());
        assert_eq!(form.author.label(), "All Authors");
        assert_eq!(form.genre.label(), "All Genres");
    }

    #[test]
    fn dropdown_options_follow_display_names() {
        let mut form = SearchForm::new(&catalog());
        form.focus = SearchField::Author;
        form.cycle_option(true);
        assert_eq!(form.author.label(), "Bram Stoker");
        assert_eq!(form.criteria().author, Selector::Only(AuthorId::from("b")));

        form.cycle_option(false);
        form.cycle_option(false);
        assert_eq!(form.author.label(), "Mary Shelley");
    }

    #[test]
    fn title_focus_ignores_option_cycling() {
        let mut form = SearchForm::new(&catalog());
        form.cycle_option(true);
        assert_eq!(form.criteria(), FilterCriteria::all());
    }
}
