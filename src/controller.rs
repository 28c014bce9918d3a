use std::path::{Path, PathBuf};

use chrono::{Local, Utc};

use crate::io::recovery;
use crate::io::store::{FileStore, KeyValueStore, StoreError};
use crate::io::task_io;
use crate::model::{Category, CategoryFilter, StatusFilter, Task, TaskFilter, ThemeMode};
use crate::ops::task_ops::{self, TaskError};
use crate::ops::view::{TaskView, build_view};

pub const MSG_EMPTY_TEXT: &str = "Please enter a task!";
pub const MSG_ADDED: &str = "Task added!";
pub const MSG_UPDATED: &str = "Task updated!";
pub const MSG_DELETED: &str = "Task deleted!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";
pub const PROMPT_EDIT: &str = "Edit task:";

/// Tone of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    /// Destructive action completed
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: &str) -> Self {
        Notice {
            kind,
            message: message.to_string(),
        }
    }
}

/// Synchronous user interaction. Calls block until the user has answered.
pub trait Interaction {
    fn notify(&mut self, notice: Notice);
    /// Ask a yes/no question
    fn confirm(&mut self, question: &str) -> bool;
    /// Ask for text, pre-filled with `initial`. `None` means cancelled.
    fn prompt(&mut self, message: &str, initial: &str) -> Option<String>;
}

/// Interaction whose answers were collected up front, e.g. by a modal in
/// the TUI that has already closed. Notices are kept for display.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    pub confirm: bool,
    pub reply: Option<String>,
    pub notices: Vec<Notice>,
    /// Questions and prompt messages seen, in order
    pub asked: Vec<String>,
}

impl PresetAnswers {
    pub fn confirming() -> Self {
        PresetAnswers {
            confirm: true,
            ..Default::default()
        }
    }

    pub fn replying(text: &str) -> Self {
        PresetAnswers {
            reply: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Interaction for PresetAnswers {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.confirm
    }

    fn prompt(&mut self, message: &str, _initial: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.reply.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// The prompt was dismissed
    Cancelled,
    /// The reply was blank; treated like a cancel
    Blank,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Number of tasks removed (more than one only on an id collision)
    Deleted(usize),
    Declined,
    NotFound,
}

/// Owns the task list, filter state and theme for one session. Every
/// mutation overwrites the stored list before returning.
pub struct TaskManager<S: KeyValueStore = FileStore> {
    store: S,
    tasks: Vec<Task>,
    filter: TaskFilter,
    theme: ThemeMode,
    recovery_dir: Option<PathBuf>,
}

impl TaskManager<FileStore> {
    /// Open the file-backed store in `data_dir`, loading tasks and theme.
    pub fn open(data_dir: &Path) -> Self {
        TaskManager::load(FileStore::new(data_dir), Some(data_dir.to_path_buf()))
    }
}

impl<S: KeyValueStore> TaskManager<S> {
    /// Load saved state from `store`. Corrupt task data falls back to an
    /// empty list and, with a `recovery_dir`, is preserved in its recovery log.
    pub fn load(store: S, recovery_dir: Option<PathBuf>) -> Self {
        let tasks = task_io::load_tasks(&store, recovery_dir.as_deref());
        let theme = task_io::load_theme(&store);
        TaskManager {
            store,
            tasks,
            filter: TaskFilter::default(),
            theme,
            recovery_dir,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: u64) -> Option<&Task> {
        task_ops::find_task(&self.tasks, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Re-read tasks and theme from the store, keeping filter state.
    pub fn reload(&mut self) {
        self.tasks = task_io::load_tasks(&self.store, self.recovery_dir.as_deref());
        self.theme = task_io::load_theme(&self.store);
    }

    /// Write the list, putting `previous` back in memory if the write
    /// fails so the session never shows tasks that were not stored.
    fn save_or_restore(&mut self, previous: Vec<Task>) -> Result<(), StoreError> {
        task_io::save_tasks(&mut self.store, &self.tasks).inspect_err(|_| {
            self.tasks = previous;
        })
    }

    /// Add a task at the front of the list. Blank text is rejected with a
    /// warning and changes nothing. Returns the new id.
    pub fn add_task(
        &mut self,
        text: &str,
        category: Category,
        ui: &mut dyn Interaction,
    ) -> Result<Option<u64>, StoreError> {
        let previous = self.tasks.clone();
        match task_ops::add_task(&mut self.tasks, text, category, Utc::now()) {
            Ok(id) => {
                self.save_or_restore(previous)?;
                ui.notify(Notice::new(NoticeKind::Success, MSG_ADDED));
                Ok(Some(id))
            }
            Err(_) => {
                ui.notify(Notice::new(NoticeKind::Warning, MSG_EMPTY_TEXT));
                Ok(None)
            }
        }
    }

    /// Flip completion. Unknown ids are ignored. Returns the new state.
    pub fn toggle_task(&mut self, id: u64) -> Result<Option<bool>, StoreError> {
        let previous = self.tasks.clone();
        let Some(completed) = task_ops::toggle_task(&mut self.tasks, id) else {
            return Ok(None);
        };
        self.save_or_restore(previous)?;
        Ok(Some(completed))
    }

    /// Prompt for replacement text and apply it in place. A dismissed
    /// prompt or blank reply leaves the task untouched without a notice.
    pub fn edit_task(&mut self, id: u64, ui: &mut dyn Interaction) -> Result<EditOutcome, StoreError> {
        let current = match self.task(id) {
            Some(task) => task.text.clone(),
            None => return Ok(EditOutcome::NotFound),
        };
        let Some(reply) = ui.prompt(PROMPT_EDIT, &current) else {
            return Ok(EditOutcome::Cancelled);
        };
        let previous = self.tasks.clone();
        match task_ops::edit_task(&mut self.tasks, id, &reply) {
            Ok(()) => {
                self.save_or_restore(previous)?;
                ui.notify(Notice::new(NoticeKind::Success, MSG_UPDATED));
                Ok(EditOutcome::Updated)
            }
            Err(TaskError::EmptyText) => Ok(EditOutcome::Blank),
            Err(TaskError::NotFound(_)) => Ok(EditOutcome::NotFound),
        }
    }

    /// Ask for confirmation, then remove the task. Unknown ids are ignored
    /// without asking.
    pub fn delete_task(&mut self, id: u64, ui: &mut dyn Interaction) -> Result<DeleteOutcome, StoreError> {
        if self.task(id).is_none() {
            return Ok(DeleteOutcome::NotFound);
        }
        if !ui.confirm(CONFIRM_DELETE) {
            return Ok(DeleteOutcome::Declined);
        }
        let previous = self.tasks.clone();
        let removed = task_ops::delete_task(&mut self.tasks, id);
        self.save_or_restore(previous)?;
        if let Some(dir) = &self.recovery_dir {
            for task in &removed {
                recovery::log_task_deletion(dir, task);
            }
        }
        ui.notify(Notice::new(NoticeKind::Removed, MSG_DELETED));
        Ok(DeleteOutcome::Deleted(removed.len()))
    }

    /// Filtered tasks in list order
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        crate::ops::search::filter_tasks(&self.tasks, &self.filter)
    }

    /// Derive the displayed list and statistics for today's local date.
    pub fn render(&self) -> TaskView {
        build_view(&self.tasks, &self.filter, Local::now().date_naive())
    }

    /// Flip light/dark and persist the preference.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StoreError> {
        self.set_theme(self.theme.toggled())?;
        Ok(self.theme)
    }

    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        task_io::save_theme(&mut self.store, mode)?;
        self.theme = mode;
        Ok(())
    }
}
