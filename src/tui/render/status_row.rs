use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::controller::{CONFIRM_DELETE, NoticeKind, PROMPT_EDIT};
use crate::tui::app::{App, Mode};

use super::helpers::pad_between;

const NAVIGATE_HINTS: &str = "a add  e edit  d delete  / search  f status  c category  t theme  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let bright = Style::default().fg(app.theme.text_bright).bg(bg);

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(notice) = &app.status_message {
                let color = match notice.kind {
                    NoticeKind::Success => app.theme.green,
                    NoticeKind::Warning => app.theme.yellow,
                    NoticeKind::Removed => app.theme.red,
                };
                let msg = Span::styled(
                    format!(" {}", notice.message),
                    Style::default().fg(color).bg(bg).add_modifier(Modifier::BOLD),
                );
                pad_between(vec![msg], vec![], width, bg)
            } else if !app.manager.filter().search().is_empty() {
                // Active search stays visible, dimmed
                let term = Span::styled(format!(" /{}", app.manager.filter().search()), dim);
                pad_between(vec![term], vec![Span::styled("Esc clear ", dim)], width, bg)
            } else if app.ui.show_key_hints {
                pad_between(vec![Span::styled(format!(" {}", NAVIGATE_HINTS), dim)], vec![], width, bg)
            } else {
                pad_between(vec![], vec![], width, bg)
            }
        }
        Mode::Add => {
            let category = app.add_category;
            let mut left = vec![
                Span::styled(" Add ", bright),
                Span::styled(
                    format!("[{} {}]", category.icon(), category.label()),
                    Style::default()
                        .fg(app.theme.category_color(category))
                        .bg(bg),
                ),
                Span::styled(": ", bright),
            ];
            left.extend(input_spans(app));
            // Warning from a blank submit shows beside the prompt
            let right = match &app.status_message {
                Some(notice) => vec![Span::styled(
                    format!("{} ", notice.message),
                    Style::default().fg(app.theme.yellow).bg(bg),
                )],
                None => vec![Span::styled("Tab category  Enter add  Esc cancel ", dim)],
            };
            pad_between(left, right, width, bg)
        }
        Mode::Edit => {
            let mut left = vec![Span::styled(format!(" {} ", PROMPT_EDIT), bright)];
            left.extend(input_spans(app));
            pad_between(left, vec![Span::styled("Enter save  Esc cancel ", dim)], width, bg)
        }
        Mode::Search => {
            let mut left = vec![Span::styled(" /", bright)];
            left.extend(input_spans(app));
            pad_between(left, vec![Span::styled("Enter keep  Esc clear ", dim)], width, bg)
        }
        Mode::Confirm => {
            let question = Span::styled(
                format!(" {} ", CONFIRM_DELETE),
                Style::default().fg(app.theme.red).bg(bg),
            );
            pad_between(vec![question, Span::styled("(y/n)", bright)], vec![], width, bg)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The edit buffer with a block cursor at `edit_cursor`
fn input_spans(app: &App) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text_bright).bg(bg);
    let (before, after) = app.edit_buffer.split_at(app.edit_cursor);
    vec![
        Span::styled(before.to_string(), text),
        Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
        Span::styled(after.to_string(), text),
    ]
}
