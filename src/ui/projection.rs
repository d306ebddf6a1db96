//! Pure projections from catalog records to display types.
//!
//! [`render_page`] turns the cursor's page of the match set into list rows and
//! the remaining count; [`render_detail`] turns one book into the detail
//! overlay's fields. Neither touches the terminal.

use crate::app::pagination::PaginationCursor;
use crate::domain::{AuthorId, Book};
use crate::ui::viewmodel::{DetailView, DisplayItem, PageView, ShowMoreInfo};
use std::collections::BTreeMap;

/// Shown when an author id has no entry in the author table.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

fn author_name<'a>(authors: &'a BTreeMap<AuthorId, String>, id: &AuthorId) -> &'a str {
    authors.get(id).map_or(UNKNOWN_AUTHOR, String::as_str)
}

/// Projects the cursor's page of `matches` into display rows.
///
/// The returned list replaces whatever was displayed before; it holds only
/// the current page's slice. No row is marked selected.
#[must_use]
pub fn render_page(
    matches: &[Book],
    cursor: PaginationCursor,
    page_size: usize,
    authors: &BTreeMap<AuthorId, String>,
) -> PageView {
    let slice = cursor.slice(matches, page_size);

    let items = slice
        .items
        .iter()
        .map(|book| DisplayItem {
            id: book.id.clone(),
            title: book.title.clone(),
            author_name: author_name(authors, &book.author).to_string(),
            image_uri: book.image.clone(),
            is_selected: false,
        })
        .collect();

    PageView {
        items,
        remaining: slice.remaining,
        has_more: slice.has_more(),
    }
}

/// Projects a book into the detail overlay's fields.
///
/// ```
/// use std::collections::BTreeMap;
/// use zshelf::domain::{book::parse_published, AuthorId, Book};
/// use zshelf::ui::projection::render_detail;
///
/// let authors = BTreeMap::from([(AuthorId::from("a1"), "Jane Doe".to_string())]);
/// let book = Book {
///     id: "b1".into(),
///     title: "Tides".into(),
///     author: "a1".into(),
///     image: "covers/tides.jpg".into(),
///     description: "Sea stories.".into(),
///     published: parse_published("1998-06-01T00:00:00.000Z").unwrap(),
///     genres: vec![],
/// };
/// assert_eq!(render_detail(&book, &authors).author_year_label, "Jane Doe (1998)");
/// ```
#[must_use]
pub fn render_detail(book: &Book, authors: &BTreeMap<AuthorId, String>) -> DetailView {
    DetailView {
        title: book.title.clone(),
        author_year_label: format!(
            "{} ({:04})",
            author_name(authors, &book.author),
            book.published_year()
        ),
        description: book.description.clone(),
        image_uri: book.image.clone(),
    }
}

/// The show-more affordance for a page projection.
#[must_use]
pub fn show_more(page: &PageView) -> ShowMoreInfo {
    ShowMoreInfo {
        label: format!("Show more ({})", page.remaining),
        remaining: page.remaining,
        enabled: page.has_more,
    }
}
