//! Footer component renderer.
//!
//! Renders the keybinding hints for the active overlay, centered and muted.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at `row`.
///
/// Text wider than the pane is truncated rather than wrapped so the layout
/// keeps its row budget.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.base());
    print!("{}", Theme::fg(theme.colors.muted));
    print!("{}", center(&footer.keybindings, cols));
    print!("{}", Theme::reset());
    row + 1
}
