//! Error types for the zshelf plugin.
//!
//! Browsing itself never fails: filtering, paging and selection are total over
//! a validated catalog. [`ShelfError`] covers what happens around it, such as a
//! malformed dataset, an unreadable palette, or trace file I/O.

use thiserror::Error;

/// The main error type for zshelf operations.
///
/// # Examples
///
/// ```
/// use zshelf::domain::ShelfError;
///
/// fn check_page_size(size: usize) -> Result<(), ShelfError> {
///     if size == 0 {
///         return Err(ShelfError::Catalog("books_per_page must be positive".to_string()));
///     }
///     Ok(())
/// }
/// assert!(check_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The catalog dataset is inconsistent.
    ///
    /// Raised for duplicate book ids, books referencing unknown authors or
    /// genres, unparseable publication dates, or a zero page size.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The catalog document is not valid JSON for the expected shape.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A built-in palette could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zshelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
