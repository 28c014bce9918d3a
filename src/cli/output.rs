use serde::Serialize;

use crate::io::recovery::RecoveryEntry;
use crate::model::Task;
use crate::ops::stats::TaskStats;
use crate::ops::view::{TaskRow, TaskView};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub text: String,
    /// Stored category tag, verbatim
    pub category: String,
    pub completed: bool,
    pub created_at: String,
    /// Display date: Today, Yesterday or dd.mm.yyyy
    pub date: String,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
    pub stats: TaskStats,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: String,
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task, row: &TaskRow) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        category: task.category.clone(),
        completed: task.completed,
        created_at: task.created_at.clone(),
        date: row.date_label.clone(),
    }
}

/// Pair each visible row with its stored task
pub fn view_to_json(tasks: &[Task], view: &TaskView) -> TaskListJson {
    let tasks = view
        .rows
        .iter()
        .filter_map(|row| {
            tasks
                .iter()
                .find(|t| t.id == row.id)
                .map(|task| task_to_json(task, row))
        })
        .collect();
    TaskListJson {
        tasks,
        stats: view.stats,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

pub const EMPTY_STATE: &str = "No tasks found.";

/// Format a row as a one-line summary
pub fn format_task_line(row: &TaskRow) -> String {
    let check = if row.completed { 'x' } else { ' ' };
    format!(
        "[{}] {}  {}  ({} {}, {})",
        check,
        row.id,
        row.text,
        row.category.icon(),
        row.category.label(),
        row.date_label
    )
}

pub fn format_stats(stats: &TaskStats) -> String {
    format!(
        "{} total, {} active, {} completed, {} today",
        stats.total, stats.active, stats.completed, stats.today
    )
}

/// The list followed by a stats footer
pub fn format_view(view: &TaskView) -> Vec<String> {
    let mut lines = Vec::new();
    if view.is_empty() {
        lines.push(EMPTY_STATE.to_string());
    } else {
        lines.extend(view.rows.iter().map(format_task_line));
    }
    lines.push(String::new());
    lines.push(format_stats(&view.stats));
    lines
}

/// Header line, `key: value` fields, then the body indented with `| `
pub fn format_recovery_entry(entry: &RecoveryEntry) -> String {
    let mut out = format!(
        "{}  {}  {}",
        entry
            .timestamp
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        entry.category,
        entry.description
    );
    for (key, value) in &entry.fields {
        out.push_str(&format!("\n  {}: {}", key, value));
    }
    for line in entry.body.lines() {
        out.push_str("\n  | ");
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use pretty_assertions::assert_eq;

    fn row(id: u64, text: &str, completed: bool) -> TaskRow {
        TaskRow {
            id,
            text: text.into(),
            category: Category::Work,
            completed,
            date_label: "Today".into(),
        }
    }

    fn stats() -> TaskStats {
        TaskStats {
            total: 2,
            active: 1,
            completed: 1,
            today: 2,
        }
    }

    #[test]
    fn task_lines() {
        assert_eq!(
            format_task_line(&row(17, "Plan sprint", false)),
            "[ ] 17  Plan sprint  (\u{1F4BC} Work, Today)"
        );
        assert!(format_task_line(&row(17, "Plan sprint", true)).starts_with("[x] 17"));
    }

    #[test]
    fn view_with_footer() {
        let view = TaskView {
            rows: vec![row(1, "a", false), row(2, "b", true)],
            stats: stats(),
        };
        let lines = format_view(&view);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "2 total, 1 active, 1 completed, 2 today");
    }

    #[test]
    fn empty_view_shows_empty_state() {
        let view = TaskView {
            rows: vec![],
            stats: stats(),
        };
        assert_eq!(
            format_view(&view),
            vec![
                EMPTY_STATE.to_string(),
                String::new(),
                "2 total, 1 active, 1 completed, 2 today".to_string()
            ]
        );
    }

    #[test]
    fn recovery_entry_block() {
        use crate::io::recovery::RecoveryCategory;
        use chrono::TimeZone;

        let mut entry = RecoveryEntry::new(RecoveryCategory::Delete, "task 17 deleted")
            .field("text", "Pay rent")
            .body("{\n  \"id\": 17\n}");
        entry.timestamp = chrono::Utc.with_ymd_and_hms(2025, 5, 14, 9, 30, 0).unwrap();
        assert_eq!(
            format_recovery_entry(&entry),
            "2025-05-14T09:30:00Z  delete  task 17 deleted\n  text: Pay rent\n  | {\n  |   \"id\": 17\n  | }"
        );
    }

    #[test]
    fn json_keeps_stored_category() {
        let task = Task {
            id: 5,
            text: "Legacy".into(),
            category: "errands".into(),
            completed: false,
            created_at: "2025-05-14T09:30:00.000Z".into(),
        };
        let view = TaskView {
            rows: vec![TaskRow {
                id: 5,
                text: "Legacy".into(),
                category: Category::General,
                completed: false,
                date_label: "14.05.2025".into(),
            }],
            stats: TaskStats {
                total: 1,
                active: 1,
                completed: 0,
                today: 0,
            },
        };
        insta::assert_json_snapshot!(view_to_json(&[task], &view), @r#"
        {
          "tasks": [
            {
              "id": 5,
              "text": "Legacy",
              "category": "errands",
              "completed": false,
              "created_at": "2025-05-14T09:30:00.000Z",
              "date": "14.05.2025"
            }
          ],
          "stats": {
            "total": 1,
            "active": 1,
            "completed": 0,
            "today": 0
          }
        }
        "#);
    }
}
