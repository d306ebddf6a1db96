//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware truncation and line filling used by the
//! components. Widths are counted in chars, which is exact for the catalog's
//! Latin text.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to `width` chars, ending in `…` when cut.
///
/// ```
/// use zshelf::ui::helpers::truncate;
///
/// assert_eq!(truncate("Moby-Dick", 20), "Moby-Dick");
/// assert_eq!(truncate("Moby-Dick", 5), "Moby…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Pads `text` with spaces on the right up to `width` chars, truncating first.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(cut.chars().count());
    format!("{cut}{}", " ".repeat(pad))
}

/// Centers `text` in a line of `width` chars.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(left + len);
    format!("{}{cut}{}", " ".repeat(left), " ".repeat(right))
}

/// Splits `text` into lines of at most `width` chars at word boundaries.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
        if line.chars().count() > width {
            lines.push(truncate(&line, width));
            line.clear();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Fills a full row in the theme's base colors.
pub fn blank_row(row: usize, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}{}{}", theme.base(), " ".repeat(cols), Theme::reset());
}
