use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::PresetAnswers;
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Y
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('y' | 'Y')) => {
            let target = app.confirm_target.take();
            app.end_input();
            if let Some(id) = target {
                let mut answers = PresetAnswers::confirming();
                app.with_store_lock(|m| m.delete_task(id, &mut answers));
                app.show_notices(&answers);
                app.clamp_cursor();
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.end_input();
        }
        _ => {}
    }
}
