use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Task;

/// Aggregate counts over the whole (unfiltered) task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Tasks created on `today` in local time
    pub today: usize,
}

pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let created_today = tasks
        .iter()
        .filter(|t| t.created_local_date() == Some(today))
        .count();
    TaskStats {
        total,
        active: total - completed,
        completed,
        today: created_today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::ops::task_ops;
    use chrono::{Duration, Local, Utc};

    #[test]
    fn three_added_one_completed() {
        let mut tasks = Vec::new();
        let now = Utc::now();
        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            task_ops::add_task(&mut tasks, text, Category::Work, now + Duration::milliseconds(i as i64))
                .unwrap();
        }
        let id = tasks[1].id;
        task_ops::toggle_task(&mut tasks, id);

        let stats = task_stats(&tasks, Local::now().date_naive());
        assert_eq!(
            stats,
            TaskStats {
                total: 3,
                active: 2,
                completed: 1,
                today: 3,
            }
        );
    }

    #[test]
    fn old_and_unparsable_dates_are_not_today() {
        let mut old = Task::new("old".into(), Category::General, Utc::now() - Duration::days(3));
        old.completed = true;
        let mut broken = Task::new("broken".into(), Category::General, Utc::now());
        broken.created_at = "not a date".into();

        let stats = task_stats(&[old, broken], Local::now().date_naive());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.today, 0);
    }

    #[test]
    fn empty_list() {
        assert_eq!(task_stats(&[], Local::now().date_naive()), TaskStats::default());
    }
}
