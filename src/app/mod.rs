//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/UI layers.
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → (render?, Actions)
//!                                          ↓
//!                               compute_viewmodel → renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Typed events and the state transition function
//! - [`modes`]: Overlay state and form drafts
//! - [`pagination`]: Page cursor over the match set
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Overlay, SearchField};
pub use pagination::PaginationCursor;
pub use state::AppState;
