use std::ops::Range;

use regex::Regex;

use crate::model::{Task, TaskFilter};

/// The subset of `tasks` matching search, status and category filters,
/// in list order (newest first).
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Case-insensitive literal matcher for a search term, `None` for an empty term.
pub fn search_regex(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(term))).ok()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
pub fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}
