//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` next to its render flag. Browsing
//! is pure state manipulation, so the only effects left for the runtime are
//! the ones that touch Zellij itself.

/// Commands executed by the plugin shim after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,
}
