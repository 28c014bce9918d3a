use chrono::{Days, NaiveDate};

use crate::model::Task;

/// Relative label for a calendar day: `Today`, `Yesterday`, or `dd.mm.yyyy`.
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%d.%m.%Y").to_string()
    }
}

/// Label for a task's creation time in local time. Unparsable timestamps
/// are shown as stored.
pub fn format_date(task: &Task, today: NaiveDate) -> String {
    match task.created_local_date() {
        Some(date) => date_label(date, today),
        None => task.created_at.clone(),
    }
}
