//! Show-more button renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShowMoreInfo;

/// Renders `[ Show more (N) ]` at `row`, greyed out when disabled.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_show_more(row: usize, info: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    let button = format!("[ {} ]", info.label);

    position_cursor(row, 1);
    print!("{}", theme.base());
    if info.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(theme.colors.accent));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(theme.colors.disabled));
    }
    print!("{}", center(&button, cols));
    print!("{}", Theme::reset());
    row + 1
}
