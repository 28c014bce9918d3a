use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Lay out `left` and `right` on one line with `bg` padding between them.
/// The right part is dropped when both do not fit.
pub(super) fn pad_between<'a>(
    mut left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    bg: Color,
) -> Line<'a> {
    let left_width = spans_width(&left);
    let right_width = spans_width(&right);
    if left_width + right_width < width {
        left.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        left.extend(right);
    } else if left_width < width {
        left.push(Span::styled(
            " ".repeat(width - left_width),
            Style::default().bg(bg),
        ));
    }
    Line::from(left)
}

/// Checkbox glyph for a row
pub(super) fn check_mark(completed: bool) -> &'static str {
    if completed { "[\u{2713}]" } else { "[ ]" }
}
