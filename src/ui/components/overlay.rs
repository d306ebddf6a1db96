//! Overlay renderers: search form, settings form and book detail.
//!
//! All three are framed boxes drawn over the list, horizontally centered and
//! starting just below the header border.

use crate::ui::helpers::{fit, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, OverlayView, SearchFormView, SettingsView};

/// Widest a box gets, frame included.
const MAX_BOX_WIDTH: usize = 72;

/// Columns left free on each side on narrow panes.
const BOX_MARGIN: usize = 2;

/// One line of box content.
struct BoxLine {
    text: String,
    emphasized: bool,
}

impl BoxLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    fn emphasized(text: impl Into<String>, emphasized: bool) -> Self {
        Self {
            text: text.into(),
            emphasized,
        }
    }
}

/// Renders `overlay` with its top edge at `row`, using at most `max_rows`.
pub fn render_overlay(row: usize, overlay: &OverlayView, theme: &Theme, cols: usize, max_rows: usize) {
    let width = cols.saturating_sub(BOX_MARGIN * 2).min(MAX_BOX_WIDTH);
    let inner = width.saturating_sub(4);

    let (title, lines) = match overlay {
        OverlayView::Search(form) => ("Search", search_lines(form)),
        OverlayView::Settings(settings) => ("Settings", settings_lines(settings)),
        OverlayView::Detail(detail) => ("Details", detail_lines(detail, inner, max_rows)),
    };

    draw_box(row, title, &lines, theme, cols, width);
}

fn search_lines(form: &SearchFormView) -> Vec<BoxLine> {
    vec![
        BoxLine::emphasized(format!("Title:  {}▏", form.title), form.focused == 0),
        BoxLine::emphasized(format!("Author: ‹ {} ›", form.author_label), form.focused == 1),
        BoxLine::emphasized(format!("Genre:  ‹ {} ›", form.genre_label), form.focused == 2),
    ]
}

fn settings_lines(settings: &SettingsView) -> Vec<BoxLine> {
    vec![BoxLine::emphasized(
        format!("Theme: ‹ {} ›", settings.theme_label),
        true,
    )]
}

fn detail_lines(detail: &DetailView, inner: usize, max_rows: usize) -> Vec<BoxLine> {
    let mut lines = vec![
        BoxLine::emphasized(detail.title.clone(), true),
        BoxLine::plain(detail.author_year_label.clone()),
        BoxLine::plain(format!("Cover: {}", detail.image_uri)),
        BoxLine::plain(String::new()),
    ];

    // frame rows plus the four lines above
    let budget = max_rows.saturating_sub(2 + lines.len());
    lines.extend(
        wrap(&detail.description, inner)
            .into_iter()
            .take(budget)
            .map(BoxLine::plain),
    );
    lines
}

fn draw_box(row: usize, title: &str, lines: &[BoxLine], theme: &Theme, cols: usize, width: usize) {
    let inner = width.saturating_sub(4);
    let left = cols.saturating_sub(width) / 2 + 1;
    let rule = width.saturating_sub(2);

    let label = format!(" {title} ");
    let label_len = label.chars().count().min(rule);

    position_cursor(row, left);
    print!("{}", theme.base());
    print!("{}", Theme::fg(theme.colors.border));
    print!("┌{}{}┐", fit(&label, label_len), "─".repeat(rule - label_len));

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(row + 1 + offset, left);
        print!("{}", theme.base());
        print!("{}", Theme::fg(theme.colors.border));
        print!("│ ");
        if line.emphasized {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(theme.colors.accent));
        } else {
            print!("{}", Theme::fg(theme.pair.dark));
        }
        print!("{}", fit(&line.text, inner));
        print!("{}", Theme::reset());
        print!("{}", theme.base());
        print!("{}", Theme::fg(theme.colors.border));
        print!(" │");
    }

    position_cursor(row + 1 + lines.len(), left);
    print!("{}", theme.base());
    print!("{}", Theme::fg(theme.colors.border));
    print!("└{}┘", "─".repeat(rule));
    print!("{}", Theme::reset());
}
