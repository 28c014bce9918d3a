use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::controller::{PresetAnswers, TaskManager};
use crate::model::{Category, UiConfig};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Draw once into a `w`x`h` test terminal and return the text, one line per
/// row, with trailing spaces and trailing empty rows removed.
pub fn render_to_string(w: u16, h: u16, draw: impl FnOnce(&mut ratatui::Frame, Rect)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            draw(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let mut rows: Vec<String> = (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows.join("\n")
}

/// Build an App over a fresh data directory holding `tasks`, listed in the
/// given order. Keep the TempDir alive for the duration of the test.
pub fn app_with_tasks(tasks: &[(&str, Category)]) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let mut manager = TaskManager::open(tmp.path());
    let mut answers = PresetAnswers::default();
    // Added newest-first, so add in reverse
    for (text, category) in tasks.iter().rev() {
        manager.add_task(text, *category, &mut answers).unwrap();
        // Ids come from the millisecond clock
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    let app = App::new(manager, UiConfig::default(), tmp.path().to_path_buf());
    (tmp, app)
}
