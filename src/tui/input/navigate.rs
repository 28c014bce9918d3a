use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::{jump_to_bottom, move_cursor};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => jump_to_bottom(app),

        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_selected(app),

        KeyCode::Char('a') => {
            app.begin_input(Mode::Add, "");
        }
        KeyCode::Char('e') => {
            let Some(id) = app.selected_id() else { return };
            let Some(text) = app.manager.task(id).map(|t| t.text.clone()) else {
                return;
            };
            app.edit_target = Some(id);
            app.begin_input(Mode::Edit, &text);
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_id() {
                app.confirm_target = Some(id);
                app.mode = Mode::Confirm;
            }
        }

        // Search and filters
        KeyCode::Char('/') => {
            let term = app.manager.filter().search().to_string();
            app.begin_input(Mode::Search, &term);
        }
        KeyCode::Esc => {
            app.manager.set_search("");
            app.clamp_cursor();
        }
        KeyCode::Char('f') => {
            let next = app.manager.filter().status.next();
            app.manager.set_status_filter(next);
            app.clamp_cursor();
        }
        KeyCode::Char('c') => {
            let next = app.manager.filter().category.next();
            app.manager.set_category_filter(next);
            app.clamp_cursor();
        }

        KeyCode::Char('t') => {
            if app.with_store_lock(|m| m.toggle_theme()).is_some() {
                app.refresh_theme();
            }
        }
        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    let Some(id) = app.selected_id() else { return };
    app.with_store_lock(|m| m.toggle_task(id));
    // A status filter may have hidden the row
    app.clamp_cursor();
}
