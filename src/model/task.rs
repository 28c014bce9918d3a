use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Task grouping label. The set is closed; stored values outside it are kept
/// verbatim on the task and only fall back to `General` for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Study,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Study,
        Category::General,
    ];

    /// The tag written to storage
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Study => "study",
            Category::General => "general",
        }
    }

    /// Parse a stored tag into a known category
    pub fn parse_tag(s: &str) -> Option<Category> {
        match s {
            "work" => Some(Category::Work),
            "personal" => Some(Category::Personal),
            "study" => Some(Category::Study),
            "general" => Some(Category::General),
            _ => None,
        }
    }

    /// Display category for a stored tag: unknown tags show as `General`
    pub fn for_display(tag: &str) -> Category {
        Category::parse_tag(tag).unwrap_or(Category::General)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Study => "Study",
            Category::General => "General",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Work => "\u{1F4BC}",
            Category::Personal => "\u{1F3AF}",
            Category::Study => "\u{1F4DA}",
            Category::General => "\u{1F4CB}",
        }
    }

    /// Next category in selector order, wrapping around
    pub fn next(self) -> Category {
        match self {
            Category::Work => Category::Personal,
            Category::Personal => Category::Study,
            Category::Study => Category::General,
            Category::General => Category::Work,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse_tag(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown category '{}' (expected work, personal, study, general)", s))
    }
}

/// A single to-do item, serialized field-for-field into the task list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Millisecond clock reading taken at creation
    pub id: u64,
    pub text: String,
    /// Stored verbatim, see [`Category::for_display`]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
    /// ISO-8601 timestamp, set once at creation
    pub created_at: String,
}

impl Task {
    /// Build a new, not yet completed task stamped with `now`.
    /// `text` must already be trimmed and non-empty.
    pub fn new(text: String, category: Category, now: DateTime<Utc>) -> Self {
        Task {
            id: now.timestamp_millis().max(0) as u64,
            text,
            category: category.as_str().to_string(),
            completed: false,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn display_category(&self) -> Category {
        Category::for_display(&self.category)
    }

    /// Local calendar day the task was created on, if the timestamp parses
    pub fn created_local_date(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    }
}
