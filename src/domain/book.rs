//! Book domain model and identifier types.
//!
//! Books are immutable records sourced from the catalog dataset. Authors and
//! genres are referenced by id and resolved to display names through the
//! [`Catalog`](super::Catalog).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Returns the raw id string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_type!(
    /// Unique identifier of a book.
    BookId
);
id_type!(
    /// Identifier of an author in the catalog's author table.
    AuthorId
);
id_type!(
    /// Identifier of a genre in the catalog's genre table.
    GenreId
);

/// A single catalog record.
///
/// # Fields
///
/// - `id`: Unique across the catalog
/// - `author`: Key into the catalog's author table
/// - `image`: Cover image URI, displayed as-is
/// - `published`: Publication timestamp with the offset it was written in
/// - `genres`: Genre ids, in dataset order, without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    pub image: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_published")]
    pub published: DateTime<FixedOffset>,
    pub genres: Vec<GenreId>,
}

impl Book {
    /// Returns the four-digit publication year, as written in the dataset.
    ///
    /// ```
    /// use zshelf::domain::book::parse_published;
    /// # use zshelf::domain::Book;
    /// let published = parse_published("1998-03-01T00:00:00.000Z").unwrap();
    /// # let book = Book {
    /// #     id: "b1".into(), title: "T".into(), author: "a1".into(),
    /// #     image: String::new(), description: String::new(),
    /// #     published, genres: vec![],
    /// # };
    /// assert_eq!(book.published_year(), 1998);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Returns whether the book is tagged with `genre`.
    #[must_use]
    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.contains(genre)
    }
}

/// Parses a publication date.
///
/// Accepts RFC 3339 timestamps (`1998-03-01T00:00:00.000Z`) and plain dates
/// (`1998-03-01`, taken as midnight UTC). The written offset is kept, so the
/// calendar date never shifts across a year boundary.
///
/// # Errors
///
/// Returns the `chrono` parse error for the date form when neither form
/// matches.
pub fn parse_published(raw: &str) -> std::result::Result<DateTime<FixedOffset>, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

fn deserialize_published<'de, D>(deserializer: D) -> std::result::Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid published date {raw:?}: {e}")))
}
