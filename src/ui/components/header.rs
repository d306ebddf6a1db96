//! Header component renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered, bold title bar at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.base());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.colors.accent));
    print!("{}", center(&header.title, cols));
    print!("{}", Theme::reset());
    row + 1
}
