use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::io::config_io;
use crate::io::task_io::{TASKS_KEY, THEME_KEY};

/// Store entries that changed on disk, as reported to the TUI loop.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreEvent {
    Changed(Vec<PathBuf>),
}

/// Watches the data directory so a TUI session picks up writes made by
/// `tl` commands or another session.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<StoreEvent>,
}

impl StoreWatcher {
    pub fn start(data_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let dir = data_dir.to_path_buf();

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            if let Ok(event) = result
                && let Some(paths) = changed_store_entries(event, &dir)
            {
                let _ = tx.send(StoreEvent::Changed(paths));
            }
        })?;
        watcher.watch(data_dir, RecursiveMode::NonRecursive)?;

        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain pending events without blocking.
    pub fn poll(&self) -> Vec<StoreEvent> {
        self.rx.try_iter().collect()
    }
}

/// Store entries under `dir` touched by a create, modify or remove event.
fn changed_store_entries(event: Event, dir: &Path) -> Option<Vec<PathBuf>> {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }
    let paths: Vec<PathBuf> = event
        .paths
        .into_iter()
        .filter(|p| p.starts_with(dir) && is_store_entry(p))
        .collect();
    (!paths.is_empty()).then_some(paths)
}

/// The task list, theme and config files. Temp files, the lock and the
/// recovery log don't count.
fn is_store_entry(path: &Path) -> bool {
    matches!(
        path.file_name().and_then(|n| n.to_str()),
        Some(name) if name == TASKS_KEY || name == THEME_KEY || name == config_io::CONFIG_FILE
    )
}
