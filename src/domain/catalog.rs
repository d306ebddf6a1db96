//! The read-only catalog dataset.
//!
//! A [`Catalog`] holds the ordered book list, the author and genre name tables,
//! and the page size. It is parsed once at startup from the JSON document
//! embedded in the plugin (`data/catalog.json`) and never mutated afterwards.

use super::book::{AuthorId, Book, BookId, GenreId};
use super::error::{Result, ShelfError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Page size used when a dataset does not specify one.
pub const DEFAULT_BOOKS_PER_PAGE: usize = 36;

/// The built-in dataset shipped with the plugin.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Validated, immutable catalog of books, authors and genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
    books_per_page: usize,
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default = "default_books_per_page")]
    books_per_page: usize,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
    books: Vec<Book>,
}

const fn default_books_per_page() -> usize {
    DEFAULT_BOOKS_PER_PAGE
}

impl Catalog {
    /// Builds a catalog from its parts, validating cross references.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Catalog`] if:
    /// - `books_per_page` is zero
    /// - two books share an id
    /// - a book references an author or genre missing from the tables
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<AuthorId, String>,
        genres: BTreeMap<GenreId, String>,
        books_per_page: usize,
    ) -> Result<Self> {
        if books_per_page == 0 {
            return Err(ShelfError::Catalog(
                "books_per_page must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(&book.id) {
                return Err(ShelfError::Catalog(format!("duplicate book id {}", book.id)));
            }
            if !authors.contains_key(&book.author) {
                return Err(ShelfError::Catalog(format!(
                    "book {} references unknown author {}",
                    book.id, book.author
                )));
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains_key(*g)) {
                return Err(ShelfError::Catalog(format!(
                    "book {} references unknown genre {genre}",
                    book.id
                )));
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            books_per_page,
        })
    }

    /// Parses and validates a catalog JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Json`] for malformed JSON or a record that does
    /// not fit the expected shape, and [`ShelfError::Catalog`] for validation
    /// failures (see [`Catalog::new`]).
    pub fn from_json(json: &str) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_from_json", bytes = json.len()).entered();

        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::new(
            document.books,
            document.authors,
            document.genres,
            document.books_per_page,
        )?;

        tracing::debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            books_per_page = catalog.books_per_page,
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Parses the dataset embedded in the plugin binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document is broken, which the test suite
    /// guards against.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All books in dataset order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Author id to display name table.
    #[must_use]
    pub const fn authors(&self) -> &BTreeMap<AuthorId, String> {
        &self.authors
    }

    /// Genre id to display name table.
    #[must_use]
    pub const fn genres(&self) -> &BTreeMap<GenreId, String> {
        &self.genres
    }

    /// Number of books shown per page.
    #[must_use]
    pub const fn books_per_page(&self) -> usize {
        self.books_per_page
    }

    /// Looks up a book anywhere in the catalog, regardless of filters.
    #[must_use]
    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }

    /// Resolves an author id to its display name.
    #[must_use]
    pub fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    /// Author `(id, name)` pairs sorted by display name, for form options.
    #[must_use]
    pub fn authors_by_name(&self) -> Vec<(AuthorId, String)> {
        Self::sorted_by_name(&self.authors)
    }

    /// Genre `(id, name)` pairs sorted by display name, for form options.
    #[must_use]
    pub fn genres_by_name(&self) -> Vec<(GenreId, String)> {
        Self::sorted_by_name(&self.genres)
    }

    fn sorted_by_name<K: Clone + Ord>(table: &BTreeMap<K, String>) -> Vec<(K, String)> {
        let mut entries: Vec<(K, String)> = table
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect();
        entries.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()).then(a.0.cmp(&b.0)));
        entries
    }
}
