//! Book list component renderer.
//!
//! Two columns: TITLE and AUTHOR. The highlighted row is drawn in the theme's
//! inverted colors and prefixed with a marker.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Share of the row given to the title column, in percent.
const TITLE_COLUMN_PERCENT: usize = 60;

/// Width of the `▸ ` marker column.
const MARKER_WIDTH: usize = 2;

/// Renders all rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_list(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let body = cols.saturating_sub(MARKER_WIDTH);
    let title_width = body * TITLE_COLUMN_PERCENT / 100;
    let author_width = body.saturating_sub(title_width);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", theme.inverted());
        print!("▸ ");
        print!("{}", fit(&item.title, title_width));
        print!("{}", fit(&item.author_name, author_width));
    } else {
        print!("{}", theme.base());
        print!("  ");
        print!("{}", fit(&item.title, title_width));
        print!("{}", Theme::fg(theme.colors.muted));
        print!("{}", fit(&item.author_name, author_width));
    }

    print!("{}", Theme::reset());
    row + 1
}
