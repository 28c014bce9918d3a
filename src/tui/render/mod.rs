pub mod filter_bar;
pub mod header;
pub mod helpers;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::App;

/// Main render function, dispatching to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | filter bar | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + stats
            Constraint::Length(2), // filters + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    // Derived once per frame: rows and stats come from the same task list
    let view = app.view();

    header::render_header(frame, app, &view.stats, chunks[0]);
    filter_bar::render_filter_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, &view, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let ranges = match search_re {
        Some(re) => crate::ops::search::find_matches(re, text),
        None => Vec::new(),
    };
    if ranges.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    }

    let mut last_end = 0;
    for range in ranges {
        if range.start > last_end {
            spans.push(Span::styled(
                text[last_end..range.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[range.start..range.end].to_string(),
            highlight_style,
        ));
        last_end = range.end;
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::{TERM_H, TERM_W, app_with_tasks, render_to_string};
    use super::*;
    use crate::model::Category;
    use ratatui::style::Color;

    #[test]
    fn full_screen_shows_header_filters_rows_and_hints() {
        let (_tmp, mut app) = app_with_tasks(&[("Plan sprint", Category::Work), ("Call mom", Category::Personal)]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("Task List"));
        assert!(lines[1].contains("2 total"));
        assert!(lines[2].contains("Status: all"));
        assert!(output.contains("Plan sprint"));
        assert!(output.contains("Call mom"));
        assert!(output.contains("a add"));
    }

    #[test]
    fn empty_list_renders_empty_state() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("No tasks found"));
        assert!(output.contains("0 total"));
    }

    #[test]
    fn highlighted_spans_split_on_matches() {
        let re = crate::ops::search::search_regex("an").unwrap();
        let base = Style::default().fg(Color::White);
        let hl = Style::default().bg(Color::Yellow);
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "Plan and", base, hl, Some(&re));
        let parts: Vec<(&str, Style)> = spans.iter().map(|s| (s.content.as_ref(), s.style)).collect();
        assert_eq!(
            parts,
            vec![("Pl", base), ("an", hl), (" ", base), ("an", hl), ("d", base)]
        );

        let mut plain = Vec::new();
        push_highlighted_spans(&mut plain, "Plan", base, hl, None);
        assert_eq!(plain.len(), 1);
    }
}
