//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything that changes while browsing:
//! the current criteria and match set, the page cursor, the active selection,
//! the open overlay with its form drafts, and the theme. The catalog it holds
//! is read-only.
//!
//! # State Components
//!
//! - **Catalog**: Books, author and genre tables, page size
//! - **Matches**: Books satisfying the last submitted criteria, replaced
//!   wholesale on each submission
//! - **Cursor**: Page pointer into the matches, reset on each submission
//! - **Highlight**: Keyboard position within the current page
//! - **Selection**: Book shown in the detail overlay
//! - **Overlay**: Which layer receives input
//! - **Theme**: Day or night palette
//!
//! # Example
//!
//! ```rust
//! use zshelf::app::AppState;
//! use zshelf::domain::Catalog;
//! use zshelf::ui::theme::ThemeSetting;
//!
//! let state = AppState::new(Catalog::builtin()?, ThemeSetting::Day);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(!viewmodel.display_items.is_empty());
//! # Ok::<(), zshelf::ShelfError>(())
//! ```

use super::modes::{Overlay, SearchField, SearchForm, SettingsForm};
use super::pagination::{PageSlice, PaginationCursor};
use crate::domain::{evaluate, Book, BookId, Catalog, FilterCriteria, Result};
use crate::ui::projection;
use crate::ui::theme::{Theme, ThemeSetting};
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, OverlayView, SearchFormView, SettingsView, UIViewModel,
};

/// Rows taken by everything except list rows: blank line, header, border,
/// show-more line, border, footer.
const CHROME_ROWS: usize = 6;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only dataset.
    pub catalog: Catalog,

    /// Criteria of the last search submission.
    pub criteria: FilterCriteria,

    /// Books matching `criteria`, in dataset order.
    pub matches: Vec<Book>,

    /// Page pointer into `matches`.
    pub cursor: PaginationCursor,

    /// Highlighted row within the current page.
    pub highlighted: usize,

    /// Book shown in the detail overlay.
    pub selection: Option<BookId>,

    /// Layer receiving input.
    pub overlay: Overlay,

    /// Search form draft.
    pub search_form: SearchForm,

    /// Settings form draft.
    pub settings_form: SettingsForm,

    /// Active palette.
    pub theme: Theme,
}

impl AppState {
    /// Creates a browsing state showing page 1 of the whole catalog.
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette for `theme` fails to parse. The plugin
    /// goes through [`AppState::with_theme`] instead.
    #[must_use]
    pub fn new(catalog: Catalog, theme: ThemeSetting) -> Self {
        Self::with_theme(catalog, Theme::for_setting(theme))
    }

    /// Creates a browsing state with an already loaded palette.
    #[must_use]
    pub fn with_theme(catalog: Catalog, theme: Theme) -> Self {
        let matches = catalog.books().to_vec();
        let search_form = SearchForm::new(&catalog);

        Self {
            catalog,
            criteria: FilterCriteria::all(),
            matches,
            cursor: PaginationCursor::reset(),
            highlighted: 0,
            selection: None,
            overlay: Overlay::Browsing,
            search_form,
            settings_form: SettingsForm {
                selection: theme.setting,
            },
            theme,
        }
    }

    /// Page size from the catalog.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.catalog.books_per_page()
    }

    /// The cursor's page of the match set.
    #[must_use]
    pub fn current_page(&self) -> PageSlice<'_, Book> {
        self.cursor.slice(&self.matches, self.page_size())
    }

    /// Whether another page follows the current one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.current_page().has_more()
    }

    /// Replaces the match set with the books satisfying `criteria` and goes
    /// back to page 1.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.matches = evaluate(&criteria, self.catalog.books());
        self.criteria = criteria;
        self.cursor = PaginationCursor::reset();
        self.highlighted = 0;
    }

    /// Advances to the next page if one exists.
    ///
    /// Returns `false` without touching the cursor when the remaining count
    /// is zero; this is the guard the disabled show-more button stands for.
    pub fn show_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.cursor = self.cursor.advance();
        self.highlighted = 0;
        true
    }

    /// Opens the detail overlay for `id`.
    ///
    /// Returns `false` and leaves the state alone if no book has that id.
    pub fn select_book(&mut self, id: &BookId) -> bool {
        if self.catalog.book(id).is_none() {
            return false;
        }
        self.selection = Some(id.clone());
        self.overlay = Overlay::Detail;
        true
    }

    /// The book under the keyboard highlight.
    #[must_use]
    pub fn highlighted_book(&self) -> Option<&Book> {
        self.current_page().items.get(self.highlighted)
    }

    /// The book in the detail overlay.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.selection.as_ref().and_then(|id| self.catalog.book(id))
    }

    /// Switches to `overlay`. Leaving the detail overlay clears the selection.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        if self.overlay == Overlay::Detail && overlay != Overlay::Detail {
            self.selection = None;
        }
        if overlay == Overlay::Search {
            self.search_form.focus = SearchField::Title;
        }
        if overlay == Overlay::Settings {
            self.settings_form.selection = self.theme.setting;
        }
        self.overlay = overlay;
    }

    /// Returns to browsing, clearing any selection.
    pub fn close_overlay(&mut self) {
        self.open_overlay(Overlay::Browsing);
    }

    /// Switches the palette to `setting`.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Theme`](crate::ShelfError::Theme) if the palette
    /// fails to parse; the current theme is kept.
    pub fn set_theme(&mut self, setting: ThemeSetting) -> Result<()> {
        self.theme = Theme::try_for_setting(setting)?;
        self.settings_form.selection = setting;
        Ok(())
    }

    /// Moves the highlight down, wrapping to the top of the page.
    pub fn move_highlight_down(&mut self) {
        let len = self.current_page().items.len();
        if len == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % len;
    }

    /// Moves the highlight up, wrapping to the bottom of the page.
    pub fn move_highlight_up(&mut self) {
        let len = self.current_page().items.len();
        if len == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            len - 1
        } else {
            self.highlighted - 1
        };
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The page is projected in full and then windowed around the highlight
    /// when it has more rows than the pane can show.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let page = projection::render_page(
            &self.matches,
            self.cursor,
            self.page_size(),
            self.catalog.authors(),
        );
        let show_more = projection::show_more(&page);

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let total = page.items.len();
        let highlighted = self.highlighted.min(total.saturating_sub(1));

        let visible_start = if total <= available_rows {
            0
        } else {
            highlighted
                .saturating_sub(available_rows / 2)
                .min(total - available_rows)
        };
        let visible_end = (visible_start + available_rows).min(total);

        let display_items = page
            .items
            .into_iter()
            .enumerate()
            .skip(visible_start)
            .take(visible_end - visible_start)
            .map(|(idx, mut item)| {
                item.is_selected = idx == highlighted && self.overlay == Overlay::Browsing;
                item
            })
            .collect();

        let empty_state = self.matches.is_empty().then(|| EmptyState {
            message: "No results found".to_string(),
            subtitle: "Your filters might be too narrow.".to_string(),
        });

        UIViewModel {
            header: self.compute_header(),
            display_items,
            selected_index: highlighted.saturating_sub(visible_start),
            show_more,
            empty_state,
            overlay: self.compute_overlay(),
            footer: self.compute_footer(),
            colors: self.theme.pair,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.catalog.books().len();
        let title = if self.criteria.is_default() {
            format!(" Book Catalog · All books ({total}) · page {} ", self.cursor.page())
        } else {
            format!(
                " Book Catalog · Filtered ({} of {total}) · page {} ",
                self.matches.len(),
                self.cursor.page()
            )
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.overlay {
            Overlay::Browsing => {
                "j/k: navigate  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            Overlay::Search => "Type: title  Tab: next field  ←/→: change  Enter: search  Esc: cancel",
            Overlay::Settings => "←/→: toggle theme  Enter: save  Esc: cancel",
            Overlay::Detail => "Esc/Enter: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self) -> Option<OverlayView> {
        match self.overlay {
            Overlay::Browsing => None,
            Overlay::Search => Some(OverlayView::Search(SearchFormView {
                title: self.search_form.title.clone(),
                author_label: self.search_form.author.label().to_string(),
                genre_label: self.search_form.genre.label().to_string(),
                focused: match self.search_form.focus {
                    SearchField::Title => 0,
                    SearchField::Author => 1,
                    SearchField::Genre => 2,
                },
            })),
            Overlay::Settings => Some(OverlayView::Settings(SettingsView {
                theme_label: self.settings_form.selection.label().to_string(),
            })),
            Overlay::Detail => self
                .selected_book()
                .map(|book| OverlayView::Detail(projection::render_detail(book, self.catalog.authors()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::parse_published;
    use crate::domain::{AuthorId, GenreId, Selector};
    use std::collections::BTreeMap;

    fn catalog(count: usize, page_size: usize) -> Catalog {
        let books = (0..count)
            .map(|i| Book {
                id: format!("b{i}").into(),
                title: format!("Volume {i}"),
                author: if i % 2 == 0 { "even" } else { "odd" }.into(),
                image: String::new(),
                description: String::new(),
                published: parse_published("2010-01-01").unwrap(),
                genres: vec![GenreId::from("essay")],
            })
            .collect();
        let authors = BTreeMap::from([
            (AuthorId::from("even"), "Eve Even".to_string()),
            (AuthorId::from("odd"), "Otto Odd".to_string()),
        ]);
        let genres = BTreeMap::from([(GenreId::from("essay"), "Essay".to_string())]);
        Catalog::new(books, authors, genres, page_size).unwrap()
    }

    #[test]
    fn theme_loads_through_fallible_path() {
        let night = Theme::try_for_setting(ThemeSetting::Night).unwrap();
        let mut state = AppState::with_theme(catalog(3, 12), night);
        assert_eq!(state.settings_form.selection, ThemeSetting::Night);

        state.set_theme(ThemeSetting::Day).unwrap();
        assert_eq!(state.theme.setting, ThemeSetting::Day);
        assert_eq!(state.settings_form.selection, ThemeSetting::Day);
    }

    #[test]
    fn short_page_shows_every_row() {
        let mut state = AppState::new(catalog(9, 12), ThemeSetting::Day);
        state.move_highlight_up(); // wraps to the last row

        // 16 rows leave 10 for the list
        let vm = state.compute_viewmodel(16, 80);
        assert_eq!(vm.display_items.len(), 9);
        assert_eq!(vm.display_items[0].title, "Volume 0");
        assert_eq!(vm.selected_index, 8);
        assert!(vm.display_items[8].is_selected);
    }

    #[test]
    fn long_page_windows_around_highlight() {
        let mut state = AppState::new(catalog(12, 12), ThemeSetting::Day);
        state.move_highlight_up();

        // 11 rows leave 5 for the list
        let vm = state.compute_viewmodel(11, 80);
        let titles: Vec<_> = vm.display_items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Volume 7", "Volume 8", "Volume 9", "Volume 10", "Volume 11"]);
        assert_eq!(vm.selected_index, 4);
    }

    #[test]
    fn starts_on_first_page_of_everything() {
        let state = AppState::new(catalog(25, 12), ThemeSetting::Day);
        assert_eq!(state.matches.len(), 25);
        assert_eq!(state.cursor.page(), 1);
        assert_eq!(state.overlay, Overlay::Browsing);
    }

    #[test]
    fn filter_resets_cursor_and_highlight() {
        let mut state = AppState::new(catalog(25, 12), ThemeSetting::Day);
        assert!(state.show_more());
        state.move_highlight_down();

        state.apply_filter(FilterCriteria {
            author: Selector::Only("odd".into()),
            ..FilterCriteria::default()
        });

        assert_eq!(state.cursor.page(), 1);
        assert_eq!(state.highlighted, 0);
        assert_eq!(state.matches.len(), 12);
    }

    #[test]
    fn show_more_is_guarded_at_the_end() {
        let mut state = AppState::new(catalog(13, 12), ThemeSetting::Day);
        assert!(state.show_more());
        assert!(!state.has_more());
        assert!(!state.show_more());
        assert_eq!(state.cursor.page(), 2);
    }

    #[test]
    fn highlight_wraps_within_page() {
        let mut state = AppState::new(catalog(3, 12), ThemeSetting::Day);
        state.move_highlight_up();
        assert_eq!(state.highlighted, 2);
        state.move_highlight_down();
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn leaving_detail_clears_selection() {
        let mut state = AppState::new(catalog(3, 12), ThemeSetting::Day);
        assert!(state.select_book(&BookId::from("b1")));
        assert_eq!(state.overlay, Overlay::Detail);

        state.open_overlay(Overlay::Search);
        assert!(state.selection.is_none());
        assert_eq!(state.overlay, Overlay::Search);
    }

    #[test]
    fn unknown_book_is_ignored() {
        let mut state = AppState::new(catalog(3, 12), ThemeSetting::Day);
        assert!(!state.select_book(&BookId::from("missing")));
        assert!(state.selection.is_none());
        assert_eq!(state.overlay, Overlay::Browsing);
    }

    #[test]
    fn viewmodel_windows_long_pages() {
        let mut state = AppState::new(catalog(30, 30), ThemeSetting::Day);
        for _ in 0..20 {
            state.move_highlight_down();
        }
        let vm = state.compute_viewmodel(16, 80);
        assert_eq!(vm.display_items.len(), 10);
        let selected = &vm.display_items[vm.selected_index];
        assert!(selected.is_selected);
        assert_eq!(selected.id, BookId::from("b20"));
    }

    #[test]
    fn viewmodel_reports_empty_state() {
        let mut state = AppState::new(catalog(3, 12), ThemeSetting::Night);
        state.apply_filter(FilterCriteria {
            title_query: "no such title".to_string(),
            ..FilterCriteria::default()
        });
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(!vm.show_more.enabled);
        assert_eq!(vm.colors, crate::ui::theme::apply_theme(ThemeSetting::Night));
        assert!(vm.header.title.contains("Filtered (0 of 3)"));
    }
}
