use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::common::edit_line;

/// Live search: the filter follows every keystroke.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cancel search
        KeyCode::Esc => {
            app.manager.set_search("");
            app.end_input();
            app.clamp_cursor();
        }
        // Keep the term and return to the list
        KeyCode::Enter => {
            app.end_input();
        }
        _ => {
            if edit_line(app, key) {
                let term = app.edit_buffer.clone();
                app.manager.set_search(&term);
                app.cursor = 0;
            }
        }
    }
}
