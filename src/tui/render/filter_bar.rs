use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{CategoryFilter, StatusFilter};
use crate::tui::app::{App, Mode};

/// Render the active filters with a separator line below
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // filters
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let filter = app.manager.filter();
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = |active: bool| {
        if active {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        }
    };
    let sep = Span::styled("  \u{2502}  ", Style::default().fg(app.theme.dim).bg(bg));

    let category_text = match filter.category {
        CategoryFilter::All => "all".to_string(),
        CategoryFilter::Only(category) => format!("{} {}", category.icon(), category.label()),
    };
    let mut spans = vec![
        Span::styled(" Status: ", label),
        Span::styled(
            filter.status.as_str(),
            value(filter.status != StatusFilter::All),
        ),
        sep.clone(),
        Span::styled("Category: ", label),
        Span::styled(category_text, value(filter.category != CategoryFilter::All)),
    ];
    // While typing, the status row shows the term instead
    if !filter.search().is_empty() && app.mode != Mode::Search {
        spans.push(sep);
        spans.push(Span::styled("Search: ", label));
        spans.push(Span::styled(filter.search().to_string(), value(true)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(app.theme.dim).bg(bg)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::tui::render::test_helpers::{TERM_W, app_with_tasks, render_to_string};

    #[test]
    fn default_filters() {
        let (_tmp, app) = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 2, |frame, area| render_filter_bar(frame, &app, area));
        let first = output.lines().next().unwrap();
        assert!(first.contains("Status: all"));
        assert!(first.contains("Category: all"));
        assert!(!first.contains("Search:"));
    }

    #[test]
    fn active_filters_and_search() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        app.manager.set_status_filter(StatusFilter::Completed);
        app.manager.set_category_filter(CategoryFilter::Only(Category::Study));
        app.manager.set_search("Chapter");
        let output = render_to_string(TERM_W, 2, |frame, area| render_filter_bar(frame, &app, area));
        let first = output.lines().next().unwrap();
        assert!(first.contains("Status: completed"));
        assert!(first.contains("Study"));
        assert!(first.contains("Search: chapter"));
    }
}
