use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '\u{2026}';

/// Width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shorten `s` to at most `max_cells` cells, ending in `…` when cut.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let Some(budget) = max_cells.checked_sub(1) else {
        return String::new();
    };
    let mut used = 0;
    let mut out: String = s
        .graphemes(true)
        .take_while(|g| {
            used += display_width(g);
            used <= budget
        })
        .collect();
    out.push(ELLIPSIS);
    out
}

/// Byte offset of the grapheme after the one at `byte_offset`, `None` at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..).filter(|r| !r.is_empty())?;
    let first = rest.graphemes(true).next()?;
    Some(byte_offset + first.len())
}

/// Byte offset of the grapheme before `byte_offset`, `None` at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let before = s.get(..byte_offset).filter(|b| !b.is_empty())?;
    let last = before.graphemes(true).next_back()?;
    Some(byte_offset - last.len())
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word at or before `byte_offset`, skipping blanks first.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let before = &s[..byte_offset.min(s.len())];
    let mut pos = before.len();
    let mut in_word = false;
    for (i, g) in before.grapheme_indices(true).rev() {
        if is_blank(g) {
            if in_word {
                break;
            }
        } else {
            in_word = true;
        }
        pos = i;
    }
    if in_word { pos } else { 0 }
}

/// Start of the next word after `byte_offset`, or the end of `s`.
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    let start = byte_offset.min(s.len());
    let mut seen_blank = false;
    for (i, g) in s[start..].grapheme_indices(true) {
        if is_blank(g) {
            seen_blank = true;
        } else if seen_blank {
            return start + i;
        }
    }
    s.len()
}
