use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::stats::TaskStats;
use crate::tui::app::App;

use super::helpers::pad_between;

/// Title row with the theme toggle glyph, then the statistics row.
pub fn render_header(frame: &mut Frame, app: &App, stats: &TaskStats, area: Rect) {
    let bg = app.theme.surface;
    let width = area.width as usize;

    let title = vec![
        Span::styled(" \u{2713} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "Task List",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let toggle = vec![
        Span::styled(
            app.manager.theme().icon(),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    let title_line = pad_between(title, toggle, width, bg);

    let number = |n: usize, label: &'static str, color: Color| {
        [
            Span::styled(
                n.to_string(),
                Style::default().fg(color).bg(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}   ", label), Style::default().fg(app.theme.dim).bg(bg)),
        ]
    };
    let mut stat_spans = vec![Span::styled(" ", Style::default().bg(bg))];
    stat_spans.extend(number(stats.total, "total", app.theme.text_bright));
    stat_spans.extend(number(stats.active, "active", app.theme.highlight));
    stat_spans.extend(number(stats.completed, "completed", app.theme.green));
    stat_spans.extend(number(stats.today, "today", app.theme.yellow));

    let paragraph = Paragraph::new(vec![title_line, Line::from(stat_spans)])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::tui::render::test_helpers::{TERM_W, app_with_tasks, render_to_string};

    #[test]
    fn shows_moon_in_light_and_sun_in_dark() {
        let (_tmp, mut app) = app_with_tasks(&[("Plan", Category::Work)]);
        let stats = app.view().stats;
        let light = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, &stats, area)
        });
        assert!(light.lines().next().unwrap().contains('\u{263E}'));

        app.manager.toggle_theme().unwrap();
        let dark = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, &stats, area)
        });
        assert!(dark.lines().next().unwrap().contains('\u{2600}'));
    }

    #[test]
    fn stats_count_everything() {
        let (_tmp, mut app) = app_with_tasks(&[("Plan", Category::Work), ("Call", Category::Personal)]);
        let id = app.manager.tasks()[0].id;
        app.manager.toggle_task(id).unwrap();
        let stats = app.view().stats;
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, &stats, area)
        });
        let second = output.lines().nth(1).unwrap();
        assert!(second.contains("2 total"));
        assert!(second.contains("1 active"));
        assert!(second.contains("1 completed"));
        assert!(second.contains("2 today"));
    }
}
