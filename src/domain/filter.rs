//! Filter criteria and the query engine.
//!
//! [`evaluate`] recomputes the full match set for a set of [`FilterCriteria`].
//! Results keep the dataset's order; there is no ranking.

use super::book::{AuthorId, Book, GenreId};

/// Either "any value" or one specific id.
///
/// The search form's `"any"` option maps to [`Selector::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    /// Returns whether `value` passes this selector.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Returns whether this selector is [`Selector::Any`].
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// User-submitted filter, created fresh on each search submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive title substring. Blank means "no title filter".
    pub title_query: String,
    pub author: Selector<AuthorId>,
    pub genre: Selector<GenreId>,
}

impl FilterCriteria {
    /// Criteria that match every book.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns whether these criteria select the whole catalog.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.title_query.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Returns whether `book` satisfies every clause.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let title_ok = self.title_query.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title_query.to_lowercase());

        let genre_ok = match &self.genre {
            Selector::Any => true,
            Selector::Only(genre) => book.has_genre(genre),
        };

        title_ok && self.author.accepts(&book.author) && genre_ok
    }
}

/// Evaluates `criteria` against `books`, returning the ordered match set.
///
/// Unknown author or genre ids simply match nothing.
///
/// ```
/// use zshelf::domain::{evaluate, FilterCriteria};
///
/// let matches = evaluate(&FilterCriteria::all(), &[]);
/// assert!(matches.is_empty());
/// ```
#[must_use]
pub fn evaluate(criteria: &FilterCriteria, books: &[Book]) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "evaluate_filter",
        total_books = books.len(),
        title_query_len = criteria.title_query.len(),
        author = ?criteria.author,
        genre = ?criteria.genre
    )
    .entered();

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter evaluated");

    matches
}
