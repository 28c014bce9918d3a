use crossterm::event::{KeyCode, KeyEvent};

use crate::controller::PresetAnswers;
use crate::tui::app::App;

use super::common::edit_line;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.end_input(),
        KeyCode::Tab => app.add_category = app.add_category.next(),
        KeyCode::Enter => submit_add(app),
        _ => {
            edit_line(app, key);
        }
    }
}

/// Blank input keeps the prompt open with the warning shown.
fn submit_add(app: &mut App) {
    let text = app.edit_buffer.clone();
    let category = app.add_category;
    let mut answers = PresetAnswers::default();
    let added = app.with_store_lock(|m| m.add_task(&text, category, &mut answers));
    app.show_notices(&answers);
    if let Some(Some(id)) = added {
        app.end_input();
        app.select_task(id);
    }
}

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.end_input(),
        KeyCode::Enter => submit_edit(app),
        _ => {
            edit_line(app, key);
        }
    }
}

/// The prompt has already been answered, so the controller gets the reply
/// up front. A blank reply is dropped without a notice.
fn submit_edit(app: &mut App) {
    let Some(id) = app.edit_target else {
        app.end_input();
        return;
    };
    let mut answers = PresetAnswers::replying(&app.edit_buffer);
    app.with_store_lock(|m| m.edit_task(id, &mut answers));
    app.show_notices(&answers);
    app.end_input();
}
