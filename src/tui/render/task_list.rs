use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::ops::view::{TaskRow, TaskView};
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{check_mark, spans_width};
use super::push_highlighted_spans;

/// Render the filtered rows, or the empty-state panel when none match.
pub fn render_task_list(frame: &mut Frame, app: &mut App, view: &TaskView, area: Rect) {
    if view.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    let visible_height = area.height as usize;
    adjust_scroll(app, visible_height);

    let search_re = app.search_re();
    let width = area.width as usize;
    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, row)| row_line(app, row, i == app.cursor, search_re.as_ref(), width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Keep the cursor row inside the visible window.
fn adjust_scroll(app: &mut App, visible_height: usize) {
    if visible_height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
}

/// ` [✓] text ...  <icon> Category · date `
fn row_line(
    app: &App,
    row: &TaskRow,
    is_cursor: bool,
    search_re: Option<&regex::Regex>,
    width: usize,
) -> Line<'static> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let check_style = if row.completed {
        Style::default().fg(theme.green).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let mut text_style = if row.completed {
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text_bright).bg(bg)
    };
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);

    let marker = if is_cursor { "\u{258E}" } else { " " };
    let lead = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(format!("{} ", check_mark(row.completed)), check_style),
    ];
    let meta = vec![
        Span::styled(
            format!("{} {}", row.category.icon(), row.category.label()),
            Style::default().fg(theme.category_color(row.category)).bg(bg),
        ),
        Span::styled(
            format!(" \u{00B7} {} ", row.date_label),
            Style::default().fg(theme.dim).bg(bg),
        ),
    ];

    // Text gets whatever the checkbox and metadata leave over
    let fixed = spans_width(&lead) + spans_width(&meta) + 2;
    let text_budget = width.saturating_sub(fixed);
    let text = unicode::truncate_to_width(&row.text, text_budget);

    let mut spans = lead;
    push_highlighted_spans(&mut spans, &text, text_style, match_style, search_re);
    let used = spans_width(&spans) + spans_width(&meta);
    spans.push(Span::styled(
        " ".repeat(width.saturating_sub(used).max(1)),
        Style::default().bg(bg),
    ));
    spans.extend(meta);
    Line::from(spans)
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    // Nothing hidden means nothing stored
    let hint = if app.manager.filter().is_empty() {
        "Press a to add your first task"
    } else {
        "Try another filter or clear the search with Esc"
    };

    // Centered panel
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(52u16.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(rows[1]);

    let panel = Paragraph::new(vec![
        Line::from(Span::styled(
            "No tasks found",
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(app.theme.dim))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme.dim)),
    )
    .style(Style::default().bg(app.theme.surface));
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);
    frame.render_widget(panel, cols[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, StatusFilter};
    use crate::tui::render::test_helpers::{TERM_W, app_with_tasks, render_to_string};

    fn list(app: &mut App, height: u16) -> String {
        let view = app.view();
        render_to_string(TERM_W, height, |frame, area| {
            render_task_list(frame, app, &view, area)
        })
    }

    #[test]
    fn rows_show_check_text_category_and_date() {
        let (_tmp, mut app) = app_with_tasks(&[("Plan sprint", Category::Work), ("Call mom", Category::Personal)]);
        let id = app.manager.tasks()[1].id;
        app.manager.toggle_task(id).unwrap();
        let output = list(&mut app, 5);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("[ ] Plan sprint"));
        assert!(lines[0].contains("Work"));
        assert!(lines[0].ends_with("Today"));
        assert!(lines[1].contains("[\u{2713}] Call mom"));
        assert!(lines[1].contains("Personal"));
    }

    #[test]
    fn long_text_is_truncated_to_fit() {
        let long = "x".repeat(200);
        let (_tmp, mut app) = app_with_tasks(&[(long.as_str(), Category::General)]);
        let output = list(&mut app, 1);
        assert!(output.contains('\u{2026}'));
        assert!(output.ends_with("Today"));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let (_tmp, mut app) = app_with_tasks(&[
            ("one", Category::Work),
            ("two", Category::Work),
            ("three", Category::Work),
            ("four", Category::Work),
        ]);
        app.cursor = 3;
        let output = list(&mut app, 2);
        assert_eq!(app.scroll_offset, 2);
        assert!(output.contains("three"));
        assert!(output.contains("four"));
        assert!(!output.contains("one"));
    }

    #[test]
    fn empty_state_hint_depends_on_filters() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        let output = list(&mut app, 10);
        assert!(output.contains("No tasks found"));
        assert!(output.contains("Press a to add"));

        let (_tmp2, mut app) = app_with_tasks(&[("Plan", Category::Work)]);
        app.manager.set_status_filter(StatusFilter::Completed);
        let output = list(&mut app, 10);
        assert!(output.contains("No tasks found"));
        assert!(output.contains("Try another filter"));

        // A filter over an empty list still points at the filter
        let (_tmp3, mut app) = app_with_tasks(&[]);
        app.manager.set_search("plan");
        let output = list(&mut app, 10);
        assert!(output.contains("Try another filter"));
    }
}
