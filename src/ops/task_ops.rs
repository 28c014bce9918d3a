use chrono::{DateTime, Utc};

use crate::model::{Category, Task};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task text cannot be empty")]
    EmptyText,
    #[error("task not found: {0}")]
    NotFound(u64),
}

/// Trim user input, rejecting blank text.
pub fn normalize_text(raw: &str) -> Result<String, TaskError> {
    let text = raw.trim();
    if text.is_empty() {
        Err(TaskError::EmptyText)
    } else {
        Ok(text.to_string())
    }
}

/// Insert a new task at the front of the list (newest first).
/// Returns the new task's id.
pub fn add_task(
    tasks: &mut Vec<Task>,
    raw_text: &str,
    category: Category,
    now: DateTime<Utc>,
) -> Result<u64, TaskError> {
    let text = normalize_text(raw_text)?;
    let task = Task::new(text, category, now);
    let id = task.id;
    tasks.insert(0, task);
    Ok(id)
}

pub fn find_task(tasks: &[Task], id: u64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

pub fn find_task_mut(tasks: &mut [Task], id: u64) -> Option<&mut Task> {
    tasks.iter_mut().find(|t| t.id == id)
}

/// Flip completion of the first task with `id`.
/// Returns the new completion state, `None` when no task matched.
pub fn toggle_task(tasks: &mut [Task], id: u64) -> Option<bool> {
    let task = find_task_mut(tasks, id)?;
    task.completed = !task.completed;
    Some(task.completed)
}

/// Replace the text of the task with `id` in place.
pub fn edit_task(tasks: &mut [Task], id: u64, raw_text: &str) -> Result<(), TaskError> {
    let text = normalize_text(raw_text)?;
    let task = find_task_mut(tasks, id).ok_or(TaskError::NotFound(id))?;
    task.text = text;
    Ok(())
}

/// Remove every task with `id` and return the removed tasks (empty when
/// nothing matched).
pub fn delete_task(tasks: &mut Vec<Task>, id: u64) -> Vec<Task> {
    let mut removed = Vec::new();
    let mut i = 0;
    while i < tasks.len() {
        if tasks[i].id == id {
            removed.push(tasks.remove(i));
        } else {
            i += 1;
        }
    }
    removed
}
