//! Append-only log of data that was dropped or deleted.
//!
//! One JSON object per line in `.recovery.jsonl` inside the data directory.
//! Lines that fail to parse are kept on prune and skipped on read.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::io::store::atomic_write;
use crate::model::Task;

/// Size above which old entries are trimmed on the next append (1 MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

/// Default number of days before entries are prunable.
pub const PRUNE_AGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryCategory {
    /// Stored task list could not be parsed and was replaced by an empty list
    Parser,
    /// A task was deleted by the user
    Delete,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecoveryCategory::Parser => "parser",
            RecoveryCategory::Delete => "delete",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    /// The dropped content, verbatim
    #[serde(default)]
    pub body: String,
}

impl RecoveryEntry {
    pub fn new(category: RecoveryCategory, description: impl Into<String>) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            fields: BTreeMap::new(),
            body: String::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".recovery.jsonl")
}

/// Append an entry. Failures are reported on stderr, never returned.
pub fn log_recovery(data_dir: &Path, entry: RecoveryEntry) {
    if let Err(e) = append_entry(data_dir, &entry) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn append_entry(data_dir: &Path, entry: &RecoveryEntry) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let path = recovery_log_path(data_dir);

    if fs::metadata(&path).is_ok_and(|m| m.len() > MAX_LOG_SIZE) {
        let cutoff = Utc::now() - Duration::days(PRUNE_AGE_DAYS);
        let content = fs::read_to_string(&path)?;
        atomic_write(&path, retain_since(&content, cutoff).0.as_bytes())?;
    }

    let mut line = serde_json::to_string(entry)?;
    line.push('\n');
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(line.as_bytes())
}

/// Keep a deleted task's stored JSON so it can be pasted back.
pub fn log_task_deletion(data_dir: &Path, task: &Task) {
    let body = serde_json::to_string_pretty(task).unwrap_or_else(|_| task.text.clone());
    log_recovery(
        data_dir,
        RecoveryEntry::new(RecoveryCategory::Delete, format!("task {} deleted", task.id))
            .field("text", task.text.clone())
            .body(body),
    );
}

fn parse_line(line: &str) -> Option<RecoveryEntry> {
    serde_json::from_str(line).ok()
}

/// Entries newest first, at most `limit` of them.
pub fn read_recovery_entries(data_dir: &Path, limit: Option<usize>) -> Vec<RecoveryEntry> {
    let Ok(content) = fs::read_to_string(recovery_log_path(data_dir)) else {
        return Vec::new();
    };
    content
        .lines()
        .rev()
        .filter_map(parse_line)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Drop entries older than `cutoff`, returning the kept text and the
/// number of entries removed.
fn retain_since(content: &str, cutoff: DateTime<Utc>) -> (String, usize) {
    let mut kept = String::new();
    let mut removed = 0;
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        if parse_line(line).is_some_and(|e| e.timestamp < cutoff) {
            removed += 1;
        } else {
            kept.push_str(line);
            kept.push('\n');
        }
    }
    (kept, removed)
}

/// Remove every entry when `all`, otherwise entries older than `before`
/// (default [`PRUNE_AGE_DAYS`] ago). Returns the number removed.
pub fn prune_recovery(data_dir: &Path, before: Option<DateTime<Utc>>, all: bool) -> io::Result<usize> {
    let path = recovery_log_path(data_dir);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let cutoff = if all {
        DateTime::<Utc>::MAX_UTC
    } else {
        before.unwrap_or_else(|| Utc::now() - Duration::days(PRUNE_AGE_DAYS))
    };
    let (kept, removed) = retain_since(&content, cutoff);
    if removed > 0 {
        atomic_write(&path, kept.as_bytes())?;
    }
    Ok(removed)
}
