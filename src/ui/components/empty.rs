//! Empty state component renderer.
//!
//! Shown in place of the list when the current criteria match no books.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message starting at `row`.
///
/// ```text
/// [blank line]
///            No results found
///    Your filters might be too narrow.
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row + 1, 1);
    print!("{}", theme.base());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.colors.empty_state));
    print!("{}", center(&empty.message, cols));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", theme.base());
    print!("{}", Theme::fg(theme.colors.muted));
    print!("{}", center(&empty.subtitle, cols));
    print!("{}", Theme::reset());
}
