use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::{Category, Task};

/// View restriction by completion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    /// all → active → completed → all
    pub fn next(self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" | "done" => Ok(StatusFilter::Completed),
            _ => Err(format!(
                "unknown status '{}' (expected all, active, completed)",
                s
            )),
        }
    }
}

/// View restriction by category. `Only` compares against the stored tag
/// exactly, so tasks with unrecognized tags only show under `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => task.category == category.as_str(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// all → work → personal → study → general → all
    pub fn next(self) -> CategoryFilter {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::Work),
            CategoryFilter::Only(Category::General) => CategoryFilter::All,
            CategoryFilter::Only(category) => CategoryFilter::Only(category.next()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// Current filter/search state of a session. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub category: CategoryFilter,
    /// Search substring, stored lowercased
    search: String,
}

impl TaskFilter {
    pub fn new(status: StatusFilter, category: CategoryFilter, search: &str) -> Self {
        let mut filter = TaskFilter {
            status,
            category,
            search: String::new(),
        };
        filter.set_search(search);
        filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
    }

    /// True when search, status and category all match
    pub fn matches(&self, task: &Task) -> bool {
        task.text.to_lowercase().contains(&self.search)
            && self.status.matches(task)
            && self.category.matches(task)
    }

    /// True when no restriction is in effect
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.status == StatusFilter::All
            && self.category == CategoryFilter::All
    }
}
