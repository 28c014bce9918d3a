use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

/// Normalize Shift+letter from terminals using the kitty keyboard protocol,
/// which report `Char('g') + SHIFT` instead of `Char('G')`.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Move the list cursor by `delta` rows, clamped to the visible rows.
pub(super) fn move_cursor(app: &mut App, delta: i32) {
    let count = app.manager.filtered_tasks().len();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    let new_cursor = (app.cursor as i32 + delta).clamp(0, count as i32 - 1);
    app.cursor = new_cursor as usize;
}

pub(super) fn jump_to_bottom(app: &mut App) {
    app.cursor = app.manager.filtered_tasks().len().saturating_sub(1);
}

/// Single-line editing keys shared by the add, edit and search prompts.
/// Returns false when the key is not an editing key.
pub(super) fn edit_line(app: &mut App, key: KeyEvent) -> bool {
    let m = key.modifiers;
    match key.code {
        KeyCode::Left if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
        }
        KeyCode::Right if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_right(&app.edit_buffer, app.edit_cursor);
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        // Word backspace (Alt or Ctrl)
        KeyCode::Backspace
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let new_pos = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.drain(new_pos..app.edit_cursor);
            app.edit_cursor = new_pos;
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(prev..app.edit_cursor);
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(app.edit_cursor..next);
            }
        }
        KeyCode::Char(c) if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => return false,
    }
    true
}
