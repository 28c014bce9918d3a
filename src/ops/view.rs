use chrono::NaiveDate;

use crate::model::{Category, Task, TaskFilter};
use crate::ops::search::filter_tasks;
use crate::ops::stats::{TaskStats, task_stats};
use crate::util::dates::format_date;

/// One displayed row of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub text: String,
    /// Display category (unknown stored tags show as general)
    pub category: Category,
    pub completed: bool,
    pub date_label: String,
}

impl TaskRow {
    fn from_task(task: &Task, today: NaiveDate) -> Self {
        TaskRow {
            id: task.id,
            text: task.text.clone(),
            category: task.display_category(),
            completed: task.completed,
            date_label: format_date(task, today),
        }
    }
}

/// Everything a front end needs to draw the list: the filtered rows and
/// statistics over the unfiltered list. An empty `rows` means the
/// empty-state indicator is shown instead of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub rows: Vec<TaskRow>,
    pub stats: TaskStats,
}

impl TaskView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn build_view(tasks: &[Task], filter: &TaskFilter, today: NaiveDate) -> TaskView {
    TaskView {
        rows: filter_tasks(tasks, filter)
            .into_iter()
            .map(|task| TaskRow::from_task(task, today))
            .collect(),
        stats: task_stats(tasks, today),
    }
}
