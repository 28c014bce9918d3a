use std::path::Path;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::io::store::{KeyValueStore, StoreError};
use crate::model::{Task, ThemeMode};

/// Key holding the JSON task list
pub const TASKS_KEY: &str = "tasks.json";
/// Key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Result of reading the task list entry, before any fallback
#[derive(Debug)]
pub enum StoredTasks {
    Missing,
    Parsed(Vec<Task>),
    Corrupt { raw: String, error: String },
}

/// Read and parse the task list entry without applying fallbacks.
pub fn read_tasks<S: KeyValueStore + ?Sized>(store: &S) -> Result<StoredTasks, StoreError> {
    let raw = match store.get(TASKS_KEY)? {
        Some(raw) => raw,
        None => return Ok(StoredTasks::Missing),
    };
    if raw.trim().is_empty() {
        return Ok(StoredTasks::Missing);
    }
    Ok(match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(tasks) => StoredTasks::Parsed(tasks),
        Err(e) => StoredTasks::Corrupt {
            raw,
            error: e.to_string(),
        },
    })
}

/// Load the saved task list. Never fails: a missing, unreadable or
/// unparsable entry yields an empty list. Unparsable content is copied to
/// the recovery log in `recovery_dir` before it can be overwritten.
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S, recovery_dir: Option<&Path>) -> Vec<Task> {
    match read_tasks(store) {
        Ok(StoredTasks::Parsed(tasks)) => tasks,
        Ok(StoredTasks::Missing) => Vec::new(),
        Ok(StoredTasks::Corrupt { raw, error }) => {
            eprintln!("warning: saved tasks could not be parsed, starting empty: {}", error);
            if let Some(dir) = recovery_dir {
                recovery::log_recovery(
                    dir,
                    RecoveryEntry::new(RecoveryCategory::Parser, "unparsable task list")
                        .field("key", TASKS_KEY)
                        .field("error", error)
                        .body(raw),
                );
            }
            Vec::new()
        }
        Err(e) => {
            eprintln!("warning: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the stored task list with `tasks`.
pub fn save_tasks<S: KeyValueStore + ?Sized>(store: &mut S, tasks: &[Task]) -> Result<(), StoreError> {
    let content = serde_json::to_string(tasks)?;
    store.set(TASKS_KEY, &content)
}

/// Load the theme preference, `light` when absent or unreadable.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> ThemeMode {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => ThemeMode::from_stored(&value),
        Ok(None) => ThemeMode::default(),
        Err(e) => {
            eprintln!("warning: {}", e);
            ThemeMode::default()
        }
    }
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, mode: ThemeMode) -> Result<(), StoreError> {
    store.set(THEME_KEY, mode.as_str())
}
