use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::controller::{Notice, NoticeKind, PresetAnswers, TaskManager};
use crate::io::config_io::read_config;
use crate::io::lock::FileLock;
use crate::io::store::{StoreError, resolve_data_dir};
use crate::io::watcher::StoreWatcher;
use crate::model::{Category, UiConfig};
use crate::ops::search::search_regex;
use crate::ops::view::TaskView;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task
    Add,
    /// Editing the text of `edit_target`
    Edit,
    /// Live search; each keystroke updates the filter
    Search,
    /// Waiting for y/n on deleting `confirm_target`
    Confirm,
}

/// Main application state
pub struct App {
    pub manager: TaskManager,
    pub ui: UiConfig,
    pub data_dir: PathBuf,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Index into the visible rows
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Text being typed in Add/Edit/Search mode
    pub edit_buffer: String,
    /// Byte offset into `edit_buffer`
    pub edit_cursor: usize,
    /// Category for the task being added
    pub add_category: Category,
    pub edit_target: Option<u64>,
    pub confirm_target: Option<u64>,
    /// Toast shown in the status row until the next key press
    pub status_message: Option<Notice>,
    /// The data directory changed on disk while a prompt was open
    pub reload_pending: bool,
}

impl App {
    pub fn new(manager: TaskManager, ui: UiConfig, data_dir: PathBuf) -> Self {
        let theme = Theme::for_mode(manager.theme(), &ui);
        let add_category = ui.default_category;
        App {
            manager,
            ui,
            data_dir,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            add_category,
            edit_target: None,
            confirm_target: None,
            status_message: None,
            reload_pending: false,
        }
    }

    pub fn view(&self) -> TaskView {
        self.manager.render()
    }

    /// Id of the task under the cursor
    pub fn selected_id(&self) -> Option<u64> {
        self.manager
            .filtered_tasks()
            .get(self.cursor)
            .map(|task| task.id)
    }

    /// Keep the cursor on a visible row after the list changed.
    pub fn clamp_cursor(&mut self) {
        let count = self.manager.filtered_tasks().len();
        self.cursor = if count == 0 {
            0
        } else {
            self.cursor.min(count - 1)
        };
    }

    /// Move the cursor to the row showing `id`, if visible.
    pub fn select_task(&mut self, id: u64) {
        if let Some(pos) = self
            .manager
            .filtered_tasks()
            .iter()
            .position(|task| task.id == id)
        {
            self.cursor = pos;
        }
    }

    pub fn refresh_theme(&mut self) {
        self.theme = Theme::for_mode(self.manager.theme(), &self.ui);
    }

    /// Regex for highlighting the active search term in rows
    pub fn search_re(&self) -> Option<Regex> {
        search_regex(self.manager.filter().search())
    }

    /// Start typing into the line editor with `text` and the cursor at its end.
    pub fn begin_input(&mut self, mode: Mode, text: &str) {
        self.mode = mode;
        self.edit_buffer = text.to_string();
        self.edit_cursor = self.edit_buffer.len();
    }

    /// Leave any input mode, discarding the buffer.
    pub fn end_input(&mut self) {
        self.mode = Mode::Navigate;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.edit_target = None;
        self.confirm_target = None;
    }

    /// Run a mutation while holding the data directory lock. The list is
    /// re-read under the lock first, so the mutation applies on top of
    /// whatever a `tl` command stored since the last reload. Failures
    /// surface in the status row.
    pub fn with_store_lock<T>(
        &mut self,
        f: impl FnOnce(&mut TaskManager) -> Result<T, StoreError>,
    ) -> Option<T> {
        let _lock = match FileLock::acquire_default(&self.data_dir) {
            Ok(lock) => lock,
            Err(e) => {
                self.warn(e.to_string());
                return None;
            }
        };
        let selected = self.selected_id();
        self.manager.reload();
        self.refresh_theme();
        let result = f(&mut self.manager);
        self.clamp_cursor();
        if let Some(id) = selected {
            self.select_task(id);
        }
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.warn(e.to_string());
                None
            }
        }
    }

    /// Show the last notice a controller call produced.
    pub fn show_notices(&mut self, answers: &PresetAnswers) {
        if let Some(notice) = answers.last_notice() {
            self.status_message = Some(notice.clone());
        }
    }

    pub fn warn(&mut self, message: String) {
        self.status_message = Some(Notice {
            kind: NoticeKind::Warning,
            message,
        });
    }

    /// Reload if the directory changed, unless a prompt is open. A pending
    /// change waits until the prompt closes.
    pub fn reload_when_idle(&mut self) {
        if self.reload_pending && self.mode == Mode::Navigate {
            self.reload_from_disk();
        }
    }

    /// Pick up changes another process made to the data directory.
    pub fn reload_from_disk(&mut self) {
        self.reload_pending = false;
        let selected = self.selected_id();
        self.manager.reload();
        match read_config(&self.data_dir) {
            Ok(config) => self.ui = config.ui,
            Err(e) => self.warn(e.to_string()),
        }
        self.refresh_theme();
        self.clamp_cursor();
        if let Some(id) = selected {
            self.select_task(id);
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let ui = match read_config(&data_dir) {
        Ok(config) => config.ui,
        Err(e) => {
            eprintln!("warning: {}, using defaults", e);
            UiConfig::default()
        }
    };
    // Load before entering the alternate screen so corrupt-data warnings stay visible
    let manager = TaskManager::open(&data_dir);
    let mut app = App::new(manager, ui, data_dir);

    let watcher = match StoreWatcher::start(&app.data_dir) {
        Ok(w) => Some(w),
        Err(e) => {
            eprintln!("warning: not watching {}: {}", app.data_dir.display(), e);
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }

        if let Some(w) = watcher
            && !w.poll().is_empty()
        {
            app.reload_pending = true;
        }
        app.reload_when_idle();
    }
    Ok(())
}
