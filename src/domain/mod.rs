//! Domain layer for the zshelf plugin.
//!
//! Catalog records, the query engine and error types, independent of Zellij
//! APIs and rendering.
//!
//! # Organization
//!
//! - [`book`]: Book record and id newtypes
//! - [`catalog`]: Validated read-only dataset
//! - [`filter`]: Filter criteria and the query engine
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use zshelf::domain::{evaluate, Catalog, FilterCriteria};
//!
//! let catalog = Catalog::builtin()?;
//! let everything = evaluate(&FilterCriteria::all(), catalog.books());
//! assert_eq!(everything.len(), catalog.books().len());
//! # Ok::<(), zshelf::ShelfError>(())
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod filter;

pub use book::{AuthorId, Book, BookId, GenreId};
pub use catalog::Catalog;
pub use error::{Result, ShelfError};
pub use filter::{evaluate, FilterCriteria, Selector};
