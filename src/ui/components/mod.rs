//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with match counts and page number
//! - [`list`]: Book rows (TITLE, AUTHOR)
//! - [`show_more`]: Show-more button with the remaining count
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown when nothing matches
//! - [`overlay`]: Search, settings and detail boxes
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [List rows | Empty state]      ← overlays are drawn on top of this area
//! [Show more]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod overlay;
mod show_more;

use crate::ui::helpers::{blank_row, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use overlay::render_overlay;
use show_more::render_show_more;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.base());
    print!("{}", Theme::fg(theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for `vm`.
///
/// Every row is first painted in the theme's base colors so the pane takes on
/// the day or night background regardless of the terminal's own colors.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    for row in 1..=rows {
        blank_row(row, theme, cols);
    }

    let mut current_row = 2; // row 1 stays blank
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    let list_top = current_row;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_list(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let show_more_row = border_row.saturating_sub(1);

    render_show_more(show_more_row, &vm.show_more, theme, cols);
    render_border(border_row, theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(overlay) = &vm.overlay {
        let max_rows = show_more_row.saturating_sub(list_top);
        render_overlay(list_top, overlay, theme, cols, max_rows);
    }
}
